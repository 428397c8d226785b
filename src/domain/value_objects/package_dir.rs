//! Package Directory Value Object
//!
//! The output directory is deleted recursively at the start of every run, so
//! it must be a strict subdirectory of the project:
//! - relative, no `..` components
//! - not empty and not the project root itself (`.`, `./`)

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Default location of the output directory, relative to the project root
pub const DEFAULT_PACKAGE_DIRECTORY: &str = "./.package";

/// Name of the archive written inside the package directory
pub const ARCHIVE_FILE_NAME: &str = "package.zip";

/// Error when package directory validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty or names the project root
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => write!(f, "Path contains traversal components (..)"),
            PathError::AbsoluteNotAllowed => write!(f, "Absolute paths are not allowed"),
            PathError::Empty => write!(f, "Path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated package directory, normalized without `.` components
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageDirectory(PathBuf);

impl PackageDirectory {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.is_absolute() || path.has_root() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part) => normalized.push(part),
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(normalized))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Absolute location of the directory under `project_root`
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.0)
    }

    /// Absolute location of the archive under `project_root`
    pub fn archive_path(&self, project_root: &Path) -> PathBuf {
        self.resolve(project_root).join(ARCHIVE_FILE_NAME)
    }
}

impl Default for PackageDirectory {
    fn default() -> Self {
        Self(PathBuf::from(".package"))
    }
}

impl fmt::Display for PackageDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for PackageDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
