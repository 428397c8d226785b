//! Dependency collection service
//!
//! Queries the package manager for the project and then for each
//! microservice, strictly in order. The project keeps everything it reports;
//! a microservice keeps only identities no earlier scope reported.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::PackageManager;
use crate::domain::value_objects::{DependencyIdentity, DependencyPath};

/// Dependencies kept for one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDependencies {
    /// Directory the package manager was queried in
    pub scope: PathBuf,
    /// Dependencies attributed to this scope, in reported order
    pub kept: Vec<DependencyPath>,
    /// Reported dependencies already attributed to an earlier scope, or
    /// repeated within this one
    pub duplicates: usize,
}

/// Result of a collection run: the project scope first, then microservices
/// in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedDependencies {
    pub scopes: Vec<ScopeDependencies>,
}

impl CollectedDependencies {
    /// Every kept dependency, project first
    pub fn paths(&self) -> impl Iterator<Item = &DependencyPath> {
        self.scopes.iter().flat_map(|s| s.kept.iter())
    }

    pub fn len(&self) -> usize {
        self.scopes.iter().map(|s| s.kept.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects deduplicated dependency roots across scopes
pub struct DependencyCollector<'a, PM: PackageManager> {
    package_manager: &'a PM,
}

impl<'a, PM: PackageManager> DependencyCollector<'a, PM> {
    pub fn new(package_manager: &'a PM) -> Self {
        Self { package_manager }
    }

    /// Collect for `project_root`, then for each of `microservices`
    /// (relative to `project_root`), one query at a time.
    ///
    /// The returned list never holds two entries with the same identity.
    pub fn collect(&self, project_root: &Path, microservices: &[PathBuf]) -> CollectedDependencies {
        let mut seen: HashSet<DependencyIdentity> = HashSet::new();
        let mut scopes = Vec::with_capacity(microservices.len() + 1);

        // Identities are scope-relative paths, so the project's own listing
        // only loses lines printed twice.
        scopes.push(self.collect_scope(project_root.to_path_buf(), &mut seen));

        for service in microservices {
            let scope = project_root.join(service);
            scopes.push(self.collect_scope(scope, &mut seen));
        }

        CollectedDependencies { scopes }
    }

    fn collect_scope(
        &self,
        scope: PathBuf,
        seen: &mut HashSet<DependencyIdentity>,
    ) -> ScopeDependencies {
        let reported = self.package_manager.production_dependencies_or_empty(&scope);

        let mut kept = Vec::new();
        let mut duplicates = 0;
        for dep in reported
            .into_iter()
            .filter_map(|root| DependencyPath::reported_in(&scope, root))
        {
            if seen.insert(dep.identity().clone()) {
                kept.push(dep);
            } else {
                duplicates += 1;
            }
        }

        tracing::debug!(
            scope = %scope.display(),
            kept = kept.len(),
            duplicates,
            "collected production dependencies"
        );

        ScopeDependencies {
            scope,
            kept,
            duplicates,
        }
    }
}
