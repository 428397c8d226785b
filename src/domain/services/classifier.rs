//! Path classification service
//!
//! Maps a resolved file path to its destination inside the archive. Pure
//! string logic: no filesystem access.

use crate::domain::value_objects::{CompiledRoot, PathShape};

/// Destination mapping for resolved files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathClassifier {
    compiled_root: Option<CompiledRoot>,
}

impl PathClassifier {
    pub fn new(compiled_root: Option<CompiledRoot>) -> Self {
        Self { compiled_root }
    }

    /// Classifier whose compiled root is the literal prefix of `pattern`
    pub fn for_compiled_sources(pattern: &str) -> Self {
        Self::new(CompiledRoot::from_pattern(pattern))
    }

    pub fn compiled_root(&self) -> Option<&CompiledRoot> {
        self.compiled_root.as_ref()
    }

    pub fn shape<'a>(&self, path: &'a str) -> PathShape<'a> {
        PathShape::of(path, self.compiled_root.as_ref())
    }

    /// Archive destination for `path`
    pub fn destination(&self, path: &str) -> String {
        match self.shape(path) {
            PathShape::OutsideProjectViaDependencyDir {
                from_dependency_dir,
            } => from_dependency_dir.to_string(),
            PathShape::UnderCompiledRoot { relative } => relative.to_string(),
            PathShape::Other => path.to_string(),
        }
    }
}
