//! Configuration module for Packagr
//!
//! A project root must contain:
//! 1. `serverless.yml` (marker only)
//! 2. `package.json` (only `name` is read)
//! 3. `packagr.json` (packaging configuration)
//!
//! Environment variables (`PACKAGR_*`) override `packagr.json`.

mod loader;
mod types;

pub use loader::{
    load_manifest, load_project, load_with_warnings, parse_with_warnings, with_env_overrides,
    with_overrides_from, ConfigWarning, LoadedProject, ProjectManifest, CONFIG_FILE,
    ENV_NPM, ENV_PACKAGE_DIRECTORY, MANIFEST_FILE, SERVERLESS_FILE,
};
pub use types::{Microservice, PackagingConfig};
