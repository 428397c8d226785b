//! Archive plan entity
//!
//! Ordered mapping from destination path (inside the zip) to source path (on
//! disk, relative to the project root).
//!
//! Destinations are unique. Inserting a destination that is already planned
//! replaces its source (last write wins) but keeps the position where the
//! destination was first seen, so iteration order is stable across runs.

use indexmap::IndexMap;

/// The set of entries to write, keyed by destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchivePlan {
    by_destination: IndexMap<String, String>,
}

impl ArchivePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan `source` under `destination`.
    ///
    /// Returns the previously planned source when this replaces one.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Option<String> {
        self.by_destination
            .insert(destination.into(), source.into())
    }

    /// Source currently planned for `destination`
    pub fn source_for(&self, destination: &str) -> Option<&str> {
        self.by_destination.get(destination).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_destination.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_destination.is_empty()
    }

    /// Iterate `(source, destination)` in first-seen destination order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_destination
            .iter()
            .map(|(destination, source)| (source.as_str(), destination.as_str()))
    }
}
