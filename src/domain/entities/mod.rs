//! Domain Entities
//!
//! - `ArchivePlan` - destination-keyed mapping of files to archive

mod archive_plan;

pub use archive_plan::ArchivePlan;
