//! Package Event Port
//!
//! Observable interface for packaging runs. Used for JSON event streams and
//! verbose progress output.

use std::path::PathBuf;

/// Event emitted during a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageEvent {
    /// Run started for a project
    Started { project_root: PathBuf },

    /// Dependencies collected for one scope
    DependenciesCollected {
        scope: String,
        kept: usize,
        duplicates: usize,
    },

    /// Include patterns expanded
    FilesResolved { patterns: usize, files: usize },

    /// Archive plan built
    Planned { entries: usize },

    /// A planned source vanished before it could be archived
    FileSkipped { source: String },

    /// Archive written
    Completed { bytes: u64, entries: usize },
}

/// Trait for receiving package events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PackageEventSink: Send + Sync {
    /// Handle a package event
    fn on_event(&self, event: PackageEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PackageEventSink for NoopEventSink {
    fn on_event(&self, _event: PackageEvent) {}
}
