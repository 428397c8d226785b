//! Error types for Packagr
//!
//! Uses `thiserror` for library errors. Every variant is fatal for a run;
//! recoverable conditions (package-manager failures, vanished source files)
//! never become a `PackagrError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Packagr operations
pub type PackagrResult<T> = Result<T, PackagrError>;

/// Main error type for Packagr operations
#[derive(Error, Debug)]
pub enum PackagrError {
    /// `serverless.yml` is missing from the project root
    #[error("You are not launching packagr in a serverless project")]
    NotServerlessProject { root: PathBuf },

    /// `package.json` is missing from the project root
    #[error("Error: package.json not found")]
    ManifestNotFound { path: PathBuf },

    /// `package.json` exists but cannot be read or parsed
    #[error("Cannot read package.json: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// `packagr.json` is missing, unreadable or not valid JSON
    #[error("Cannot read packagr config file: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// `compiledSourcesPattern` missing or empty
    #[error("Please provide path to your compiled source code")]
    MissingCompiledSources,

    /// `microservices` missing or empty
    #[error("Please provide information on dependent services")]
    MissingMicroservices,

    /// A microservice entry has an empty `path` or `packageName`
    #[error("Microservice '{name}' must declare a non-empty '{field}'")]
    InvalidMicroservice { name: String, field: &'static str },

    /// The package directory would delete the project (or something outside it)
    #[error("Refusing to use '{path}' as package directory: it must be a subdirectory of the project")]
    UnsafePackageDirectory { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural failure of the zip stream
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// IO failure while streaming a specific entry into the archive
    #[error("Archive error while writing '{destination}': {source}")]
    ArchiveEntry {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl PackagrError {
    /// The file this error is about, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            PackagrError::ManifestNotFound { path }
            | PackagrError::InvalidManifest { path, .. }
            | PackagrError::InvalidConfig { path, .. }
            | PackagrError::UnsafePackageDirectory { path } => Some(path),
            PackagrError::NotServerlessProject { root } => Some(root),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_fields_are_distinct() {
        assert_eq!(
            PackagrError::MissingCompiledSources.to_string(),
            "Please provide path to your compiled source code"
        );
        assert_eq!(
            PackagrError::MissingMicroservices.to_string(),
            "Please provide information on dependent services"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = PackagrError::InvalidConfig {
            path: PathBuf::from("packagr.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read packagr config file: expected value at line 1 column 1"
        );
        assert_eq!(err.file(), Some(std::path::Path::new("packagr.json")));
    }

    #[test]
    fn test_error_file_absent_for_archive_errors() {
        let err = PackagrError::ArchiveEntry {
            destination: "handlers/foo.js".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.file().is_none());
        assert!(err.to_string().contains("handlers/foo.js"));
    }
}
