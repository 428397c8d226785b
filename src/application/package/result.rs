//! Package Result
//!
//! Outcome of a packaging run.

use std::path::PathBuf;

use crate::domain::entities::ArchivePlan;
use crate::domain::ports::ArchiveReport;
use crate::domain::services::{CollectedDependencies, IncludePatterns};

/// Result of a package operation
#[derive(Debug, Clone)]
pub struct PackageResult {
    /// Project root the run was anchored at
    pub project_root: PathBuf,
    /// Dependencies per scope after deduplication
    pub dependencies: CollectedDependencies,
    /// Include patterns, in expansion order
    pub patterns: IncludePatterns,
    /// Number of matched files, duplicates included
    pub resolved_files: usize,
    /// Final destination-keyed plan
    pub plan: ArchivePlan,
    /// Written archive; `None` on a dry run
    pub archive: Option<ArchiveReport>,
}

impl PackageResult {
    pub fn is_dry_run(&self) -> bool {
        self.archive.is_none()
    }

    /// Sources that vanished before they could be archived
    pub fn skipped(&self) -> &[String] {
        self.archive
            .as_ref()
            .map(|report| report.skipped.as_slice())
            .unwrap_or(&[])
    }
}
