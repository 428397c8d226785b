//! Packagr - deployable zip packaging for serverless Node.js services
//!
//! Packagr collects a project's compiled sources together with the production
//! dependencies of the project and of the sibling microservices it depends on,
//! resolves dependency overlap once, and writes everything into a single
//! `package.zip` with a normalized layout.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{PackageOptions, PackageResult, PackageUseCase};
pub use config::{load_project, ConfigWarning, LoadedProject, Microservice, PackagingConfig};
pub use error::{PackagrError, PackagrResult};
