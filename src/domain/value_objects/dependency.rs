//! Dependency value objects
//!
//! A `DependencyPath` is one installed package directory reported by the
//! package manager. Its `DependencyIdentity` is everything after the first
//! `node_modules` segment of the path, and is the key used to attribute a
//! shared dependency to exactly one scope.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Directory segment under which the package manager installs dependencies
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Package identity used for deduplication across scopes
///
/// `name` or `@scope/name` for a hoisted package. A nested install keeps
/// its parents: `express/node_modules/debug`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyIdentity(String);

impl DependencyIdentity {
    /// Extract the identity from an installed package path.
    ///
    /// Returns `None` when the path has no `node_modules` segment, or when
    /// the innermost one is not followed by a complete package name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let segments: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let first_dep_dir = segments.iter().position(|s| s == DEPENDENCY_DIR)?;
        let last_dep_dir = segments.iter().rposition(|s| s == DEPENDENCY_DIR)?;

        let name = &segments[last_dep_dir + 1..];
        match name.first() {
            Some(first) if first.starts_with('@') && name.len() >= 2 => {}
            Some(first) if !first.starts_with('@') => {}
            _ => return None,
        }

        Some(Self(segments[first_dep_dir + 1..].join("/")))
    }

    /// Extract the identity of a path reported for `scope`.
    ///
    /// Only the part of `path` below `scope` is searched.
    pub fn within(scope: &Path, path: &Path) -> Option<Self> {
        let scope = normalize(scope);
        let path = normalize(path);
        match path.strip_prefix(&scope) {
            Ok(relative) => Self::from_path(relative),
            Err(_) => Self::from_path(&path),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a hoisted package published under an npm scope
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with('@')
    }
}

impl fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An installed dependency root tagged with its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath {
    root: PathBuf,
    identity: DependencyIdentity,
}

impl DependencyPath {
    /// Tag a reported path; `None` if it carries no identity.
    pub fn from_reported(root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        let identity = DependencyIdentity::from_path(&root)?;
        Some(Self { root, identity })
    }

    /// Tag a path reported by the package manager queried in `scope`.
    pub fn reported_in(scope: &Path, root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        let identity = DependencyIdentity::within(scope, &root)?;
        Some(Self { root, identity })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn identity(&self) -> &DependencyIdentity {
        &self.identity
    }

    /// Recursive include pattern for this root, relative to `project_root`.
    ///
    /// Roots in sibling projects come out with leading `..` segments.
    pub fn root_pattern(&self, project_root: &Path) -> String {
        let relative = if self.root.is_absolute() {
            pathdiff::diff_paths(&self.root, project_root).unwrap_or_else(|| self.root.clone())
        } else {
            self.root.clone()
        };
        format!("{}/**", to_slash(&relative))
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a path with `/` separators, dropping `.` components.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        let part = match component {
            Component::CurDir => continue,
            Component::ParentDir => "..".into(),
            Component::Normal(part) => part.to_string_lossy(),
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy(),
        };
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&part);
    }
    out
}
