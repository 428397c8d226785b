//! Path shapes
//!
//! Every resolved file path falls into exactly one of three shapes, tested in
//! priority order. The shape borrows the part of the path that becomes the
//! archive destination.

use super::dependency::DEPENDENCY_DIR;

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '!'];

/// Literal directory prefix of the compiled-sources pattern (e.g. `lib`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoot(String);

impl CompiledRoot {
    /// Derive the compiled root from the leading literal segments of a pattern.
    ///
    /// `lib/**/*` gives `lib`, `dist/src/*.js` gives `dist/src`. A pattern
    /// without glob metacharacters names a file, so its parent is used.
    /// Returns `None` when no literal prefix exists (`**/*.js`).
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let segments: Vec<&str> = pattern
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        let literal_len = segments
            .iter()
            .position(|s| s.contains(GLOB_META))
            .unwrap_or_else(|| segments.len().saturating_sub(1));

        if literal_len == 0 {
            return None;
        }
        Some(Self(segments[..literal_len].join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Structural classification of a resolved file path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape<'a> {
    /// `../<sibling>/.../node_modules/...`: a dependency installed in another
    /// project. Carries the path from the re-entering `node_modules` onward.
    OutsideProjectViaDependencyDir { from_dependency_dir: &'a str },
    /// `<compiled root>/...`. Carries the path below the compiled root.
    UnderCompiledRoot { relative: &'a str },
    /// Anything else, archived verbatim.
    Other,
}

impl<'a> PathShape<'a> {
    /// Classify `path` (`/`-separated, relative to the project root).
    pub fn of(path: &'a str, compiled_root: Option<&CompiledRoot>) -> Self {
        if let Some(from_dependency_dir) = external_dependency_suffix(path) {
            return PathShape::OutsideProjectViaDependencyDir {
                from_dependency_dir,
            };
        }

        if let Some(root) = compiled_root {
            let relative = path
                .strip_prefix(root.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|rest| !rest.is_empty());
            if let Some(relative) = relative {
                return PathShape::UnderCompiledRoot { relative };
            }
        }

        PathShape::Other
    }
}

/// Suffix starting at the first `node_modules` segment of a path that begins
/// with at least one `..` segment; `None` for any other path.
fn external_dependency_suffix(path: &str) -> Option<&str> {
    if !path.starts_with("../") {
        return None;
    }

    let mut offset = 0;
    for segment in path.split('/') {
        if segment == DEPENDENCY_DIR {
            let suffix = &path[offset..];
            // Must name something inside the dependency dir
            return suffix
                .strip_prefix(DEPENDENCY_DIR)
                .filter(|rest| rest.len() > 1)
                .map(|_| suffix);
        }
        offset += segment.len() + 1;
    }
    None
}
