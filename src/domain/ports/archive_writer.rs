//! ArchiveWriter port - turns an archive plan into a file on disk

use std::path::{Path, PathBuf};

use crate::domain::entities::ArchivePlan;
use crate::domain::value_objects::ArchiveDigest;
use crate::error::PackagrResult;

/// Outcome of a completed archive write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Location of the written archive
    pub archive: PathBuf,
    /// Total size of the archive in bytes
    pub bytes: u64,
    /// Number of entries actually stored
    pub written: usize,
    /// Planned sources that were gone when the archive was streamed
    pub skipped: Vec<String>,
    /// SHA-256 of the archive file
    pub digest: ArchiveDigest,
}

/// Abstract archive writer
pub trait ArchiveWriter {
    /// Recreate `output_dir` from scratch. Called before any file is matched.
    fn prepare(&self, output_dir: &Path) -> PackagrResult<()>;

    /// Write every planned entry into an archive inside `output_dir`.
    ///
    /// `project_root` anchors the plan's relative source paths. Missing
    /// sources are reported in [`ArchiveReport::skipped`]; any other failure
    /// aborts the write.
    fn write(
        &self,
        plan: &ArchivePlan,
        project_root: &Path,
        output_dir: &Path,
    ) -> PackagrResult<ArchiveReport>;
}
