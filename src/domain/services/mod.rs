//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! I/O happens only through the ports they are given.

mod classifier;
mod dependency_collector;
mod glob_resolver;
mod planner;

pub use classifier::PathClassifier;
pub use dependency_collector::{CollectedDependencies, DependencyCollector, ScopeDependencies};
pub use glob_resolver::{internal_library_pattern, GlobResolver, IncludePatterns};
pub use planner::ArchivePlanner;
