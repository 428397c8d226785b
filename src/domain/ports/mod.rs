//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_writer;
pub mod file_matcher;
pub mod package_events;
pub mod package_manager;

pub use archive_writer::{ArchiveReport, ArchiveWriter};
pub use file_matcher::FileMatcher;
pub use package_events::{NoopEventSink, PackageEvent, PackageEventSink};
pub use package_manager::{PackageManager, PackageManagerError};
