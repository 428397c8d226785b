//! Include pattern construction and expansion
//!
//! The include set is, in order:
//! 1. the compiled-sources pattern,
//! 2. one recursive root pattern per collected dependency,
//! 3. one internal-library pattern per microservice package.
//!
//! Order only matters later, for destination overwrite in the planner.

use std::path::Path;

use crate::domain::ports::FileMatcher;
use crate::domain::value_objects::{DependencyPath, DEPENDENCY_DIR};

/// Pattern for the published library subtree of a microservice package
pub fn internal_library_pattern(package_name: &str) -> String {
    format!("{}/{}/lib/src/**/*", DEPENDENCY_DIR, package_name)
}

/// Ordered include patterns, relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludePatterns(Vec<String>);

impl IncludePatterns {
    pub fn build<'a>(
        project_root: &Path,
        compiled_sources: &str,
        dependencies: impl IntoIterator<Item = &'a DependencyPath>,
        package_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut patterns = vec![compiled_sources.to_string()];
        patterns.extend(
            dependencies
                .into_iter()
                .map(|dep| dep.root_pattern(project_root)),
        );
        patterns.extend(package_names.into_iter().map(internal_library_pattern));
        Self(patterns)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Expands include patterns into concrete files
pub struct GlobResolver<'a, M: FileMatcher> {
    matcher: &'a M,
}

impl<'a, M: FileMatcher> GlobResolver<'a, M> {
    pub fn new(matcher: &'a M) -> Self {
        Self { matcher }
    }

    /// All matches of every pattern, concatenated in pattern order.
    ///
    /// Files matched by several patterns appear several times.
    pub fn resolve(&self, project_root: &Path, patterns: &IncludePatterns) -> Vec<String> {
        let mut files = Vec::new();
        for pattern in patterns.as_slice() {
            let matched = self.matcher.matches(project_root, pattern);
            tracing::debug!(pattern = %pattern, files = matched.len(), "expanded include pattern");
            files.extend(matched);
        }
        files
    }
}
