//! Configuration type definitions

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::value_objects::{PackageDirectory, DEFAULT_PACKAGE_DIRECTORY};
use crate::error::{PackagrError, PackagrResult};

/// A sibling service the project depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Microservice {
    /// Directory of the service, relative to the project root
    pub path: PathBuf,
    /// Name the service is installed under in the project's `node_modules`
    pub package_name: String,
}

/// Validated contents of `packagr.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingConfig {
    /// Glob selecting the compiled sources, relative to the project root
    pub compiled_sources_pattern: String,

    /// Dependent services in declaration order
    pub microservices: IndexMap<String, Microservice>,

    /// Output directory, recreated on every run
    pub package_directory: PackageDirectory,

    /// Package manager executable, when overridden (`PACKAGR_NPM`)
    pub npm: Option<String>,
}

impl PackagingConfig {
    /// Microservice directories in declaration order
    pub fn microservice_paths(&self) -> Vec<PathBuf> {
        self.microservices
            .values()
            .map(|service| service.path.clone())
            .collect()
    }

    /// Installed package names of the microservices, in declaration order
    pub fn package_names(&self) -> Vec<String> {
        self.microservices
            .values()
            .map(|service| service.package_name.clone())
            .collect()
    }
}

/// `packagr.json` as written, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPackagingConfig {
    #[serde(default)]
    pub compiled_sources_pattern: Option<String>,

    /// Shorter spelling, read only when `compiledSourcesPattern` is absent
    #[serde(default)]
    pub compiled_sources: Option<String>,

    #[serde(default)]
    pub microservices: Option<IndexMap<String, RawMicroservice>>,

    #[serde(default)]
    pub package_directory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMicroservice {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub package_name: Option<String>,
}

impl RawPackagingConfig {
    /// Check required fields; the first problem found is reported
    pub(crate) fn validate(self) -> PackagrResult<PackagingConfig> {
        let compiled_sources_pattern = match self.compiled_sources_pattern.or(self.compiled_sources) {
            Some(pattern) if !pattern.trim().is_empty() => pattern,
            _ => return Err(PackagrError::MissingCompiledSources),
        };

        let raw_services = match self.microservices {
            Some(services) if !services.is_empty() => services,
            _ => return Err(PackagrError::MissingMicroservices),
        };

        let mut microservices = IndexMap::with_capacity(raw_services.len());
        for (name, raw) in raw_services {
            let path = non_empty(raw.path).ok_or_else(|| PackagrError::InvalidMicroservice {
                name: name.clone(),
                field: "path",
            })?;
            let package_name =
                non_empty(raw.package_name).ok_or_else(|| PackagrError::InvalidMicroservice {
                    name: name.clone(),
                    field: "packageName",
                })?;
            microservices.insert(
                name,
                Microservice {
                    path: PathBuf::from(path),
                    package_name,
                },
            );
        }

        let package_directory = parse_package_directory(
            self.package_directory
                .as_deref()
                .unwrap_or(DEFAULT_PACKAGE_DIRECTORY),
        )?;

        Ok(PackagingConfig {
            compiled_sources_pattern,
            microservices,
            package_directory,
            npm: None,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_package_directory(value: &str) -> PackagrResult<PackageDirectory> {
    PackageDirectory::new(value).map_err(|err| {
        tracing::debug!(package_directory = %value, error = %err, "rejected package directory");
        PackagrError::UnsafePackageDirectory {
            path: PathBuf::from(value),
        }
    })
}
