//! Package Use Case
//!
//! Orchestrates the packaging flow:
//! 1. Recreate the package directory (skipped on dry run)
//! 2. Collect production dependencies (project, then each microservice)
//! 3. Build the include patterns
//! 4. Expand them into files
//! 5. Plan archive destinations
//! 6. Write the archive (skipped on dry run)
//!
//! This use case is pure orchestration - all business logic lives in domain services.

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    ArchiveWriter, FileMatcher, NoopEventSink, PackageEvent, PackageEventSink, PackageManager,
};
use crate::domain::services::{
    ArchivePlanner, DependencyCollector, GlobResolver, IncludePatterns, PathClassifier,
};
use crate::error::PackagrResult;

use super::options::PackageOptions;
use super::result::PackageResult;

/// Package use case - orchestrates a packaging run
///
/// Parameterized by its ports so tests can swap npm, the filesystem glob
/// and the zip writer independently.
pub struct PackageUseCase<PM, M, AW>
where
    PM: PackageManager,
    M: FileMatcher,
    AW: ArchiveWriter,
{
    package_manager: PM,
    matcher: M,
    writer: AW,
}

impl<PM, M, AW> PackageUseCase<PM, M, AW>
where
    PM: PackageManager,
    M: FileMatcher,
    AW: ArchiveWriter,
{
    pub fn new(package_manager: PM, matcher: M, writer: AW) -> Self {
        Self {
            package_manager,
            matcher,
            writer,
        }
    }

    /// Execute the package use case
    pub fn execute(&self, options: &PackageOptions) -> PackagrResult<PackageResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the package use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &PackageOptions,
        event_sink: Arc<dyn PackageEventSink>,
    ) -> PackagrResult<PackageResult> {
        let root = options.project_root.as_path();

        event_sink.on_event(PackageEvent::Started {
            project_root: root.to_path_buf(),
        });

        let output_dir = options.output_dir();
        if !options.dry_run {
            self.writer.prepare(&output_dir)?;
        }

        let dependencies =
            DependencyCollector::new(&self.package_manager).collect(root, &options.microservices);
        for scope in &dependencies.scopes {
            event_sink.on_event(PackageEvent::DependenciesCollected {
                scope: scope_label(root, &scope.scope),
                kept: scope.kept.len(),
                duplicates: scope.duplicates,
            });
        }

        let patterns = IncludePatterns::build(
            root,
            &options.compiled_sources_pattern,
            dependencies.paths(),
            options.package_names.iter().map(String::as_str),
        );

        let files = GlobResolver::new(&self.matcher).resolve(root, &patterns);
        event_sink.on_event(PackageEvent::FilesResolved {
            patterns: patterns.len(),
            files: files.len(),
        });

        let classifier = PathClassifier::for_compiled_sources(&options.compiled_sources_pattern);
        if classifier.compiled_root().is_none() {
            tracing::warn!(
                pattern = %options.compiled_sources_pattern,
                "compiled sources pattern has no directory prefix, sources keep their paths"
            );
        }
        let plan = ArchivePlanner::new(&classifier).plan(&files);
        event_sink.on_event(PackageEvent::Planned {
            entries: plan.len(),
        });

        tracing::info!(
            dependencies = dependencies.len(),
            patterns = patterns.len(),
            files = files.len(),
            entries = plan.len(),
            "archive planned"
        );

        let archive = if options.dry_run {
            None
        } else {
            let report = self.writer.write(&plan, root, &output_dir)?;
            for source in &report.skipped {
                event_sink.on_event(PackageEvent::FileSkipped {
                    source: source.clone(),
                });
            }
            event_sink.on_event(PackageEvent::Completed {
                bytes: report.bytes,
                entries: report.written,
            });
            Some(report)
        };

        Ok(PackageResult {
            project_root: root.to_path_buf(),
            dependencies,
            patterns,
            resolved_files: files.len(),
            plan,
            archive,
        })
    }
}

/// Scope as shown to users: `.` for the project, relative path otherwise
fn scope_label(root: &Path, scope: &Path) -> String {
    match scope.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => crate::domain::value_objects::to_slash(rel),
        Err(_) => scope.display().to_string(),
    }
}
