//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod dependency;
mod hash;
mod package_dir;
mod path_shape;

pub use config_warning::ConfigWarning;
pub use dependency::{to_slash, DependencyIdentity, DependencyPath, DEPENDENCY_DIR};
pub use hash::ArchiveDigest;
pub use package_dir::{
    PackageDirectory, PathError, ARCHIVE_FILE_NAME, DEFAULT_PACKAGE_DIRECTORY,
};
pub use path_shape::{CompiledRoot, PathShape};
