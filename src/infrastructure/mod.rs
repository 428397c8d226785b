//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `npm` - `PackageManager` backed by the `npm` executable
//! - `glob` - `FileMatcher` backed by a directory walk
//! - `archive` - `ArchiveWriter` producing `package.zip`
//! - `events/` - `PackageEventSink` implementations (NDJSON)

pub mod archive;
pub mod events;
pub mod glob;
pub mod npm;

// Re-export for convenience
pub use archive::{prepare_output_dir, ZipArchiveWriter};
pub use events::JsonEventSink;
pub use glob::WalkGlobMatcher;
pub use npm::{parse_parseable, NpmCli, NPM_LS_ARGS};
