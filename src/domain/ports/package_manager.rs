//! PackageManager port - enumerates installed production dependencies
//!
//! One query per scope (the project, then each microservice directory). A
//! failed query is not fatal for a packaging run: callers use
//! [`PackageManager::production_dependencies_or_empty`], which turns any
//! failure into an empty listing and logs it.

use std::path::{Path, PathBuf};

/// Package manager query errors
#[derive(Debug)]
pub enum PackageManagerError {
    /// The package manager executable could not be started
    Spawn { program: String, source: std::io::Error },
    /// The package manager ran but exited unsuccessfully
    Failed { code: Option<i32>, stderr: String },
    /// The scope directory does not exist
    MissingScope(PathBuf),
}

impl std::fmt::Display for PackageManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageManagerError::Spawn { program, source } => {
                write!(f, "failed to run '{}': {}", program, source)
            }
            PackageManagerError::Failed { code, stderr } => {
                match code {
                    Some(code) => write!(f, "exited with status {}", code)?,
                    None => write!(f, "terminated by signal")?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            PackageManagerError::MissingScope(path) => {
                write!(f, "directory not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for PackageManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackageManagerError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract package manager
///
/// Implementations:
/// - `NpmCli` - runs `npm ls` as a subprocess
/// - test doubles returning canned listings
pub trait PackageManager {
    /// Installed production dependency directories for the project at `scope`.
    ///
    /// Returned paths are as reported (usually absolute); lines that are not
    /// dependency directories are the caller's concern.
    fn production_dependencies(&self, scope: &Path) -> Result<Vec<PathBuf>, PackageManagerError>;

    /// Like [`production_dependencies`](Self::production_dependencies) but a
    /// failure yields an empty list, so one broken scope does not abort the
    /// run.
    fn production_dependencies_or_empty(&self, scope: &Path) -> Vec<PathBuf> {
        match self.production_dependencies(scope) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::warn!(
                    scope = %scope.display(),
                    error = %err,
                    "dependency listing failed, continuing without dependencies for this scope"
                );
                Vec::new()
            }
        }
    }
}
