//! FileMatcher port - glob pattern expansion
//!
//! Patterns are `/`-separated and relative to a root directory. They may start
//! with `..` segments to reach sibling projects. Matches come back in the same
//! relative form (`../users/node_modules/axios/index.js`), which is what the
//! path classifier expects.

use std::path::Path;

/// Abstract glob matcher
pub trait FileMatcher {
    /// Regular files under `root` matching `pattern`.
    ///
    /// A pattern that matches nothing, or that cannot be parsed, yields an
    /// empty list.
    fn matches(&self, root: &Path, pattern: &str) -> Vec<String>;
}
