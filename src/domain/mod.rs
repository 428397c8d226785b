//! Domain Layer
//!
//! The core of Packagr - dependency attribution, path classification and
//! archive planning, without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - ArchivePlan
//! - `value_objects/` - DependencyIdentity, PathShape, PackageDirectory, ArchiveDigest
//! - `services/` - PathClassifier, DependencyCollector, GlobResolver, ArchivePlanner
//! - `ports/` - Interfaces implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes directly
//! 2. **Pure Functions** - Classification and planning are functions of their inputs
//! 3. **Ports & Adapters** - npm, globbing and zip writing go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
