//! Package Options
//!
//! Inputs of a packaging run, detached from the config file format.

use std::path::PathBuf;

use crate::config::PackagingConfig;
use crate::domain::value_objects::PackageDirectory;

/// Options for the package use case
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Canonical project root; every relative path is resolved against it
    pub project_root: PathBuf,
    /// Glob selecting the compiled sources
    pub compiled_sources_pattern: String,
    /// Microservice directories, relative to the project root, in order
    pub microservices: Vec<PathBuf>,
    /// Installed package names of the microservices, in order
    pub package_names: Vec<String>,
    /// Output directory, relative to the project root
    pub package_directory: PackageDirectory,
    /// Plan only (don't touch the output directory)
    pub dry_run: bool,
}

impl PackageOptions {
    pub fn new(project_root: impl Into<PathBuf>, compiled_sources_pattern: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            compiled_sources_pattern: compiled_sources_pattern.into(),
            microservices: Vec::new(),
            package_names: Vec::new(),
            package_directory: PackageDirectory::default(),
            dry_run: false,
        }
    }

    pub fn from_config(project_root: impl Into<PathBuf>, config: &PackagingConfig) -> Self {
        Self {
            project_root: project_root.into(),
            compiled_sources_pattern: config.compiled_sources_pattern.clone(),
            microservices: config.microservice_paths(),
            package_names: config.package_names(),
            package_directory: config.package_directory.clone(),
            dry_run: false,
        }
    }

    /// Add a microservice at `path` installed as `package_name`
    pub fn with_microservice(mut self, path: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        self.microservices.push(path.into());
        self.package_names.push(package_name.into());
        self
    }

    pub fn with_package_directory(mut self, dir: PackageDirectory) -> Self {
        self.package_directory = dir;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Absolute output directory
    pub fn output_dir(&self) -> PathBuf {
        self.package_directory.resolve(&self.project_root)
    }
}
