//! Package Module
//!
//! Orchestrates a packaging run.
//!
//! ## Structure
//!
//! - `options` - Run inputs (`PackageOptions`)
//! - `result` - Run outcome (`PackageResult`)
//! - `use_case` - Core use case logic (`PackageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use packagr::application::package::{PackageOptions, PackageUseCase};
//!
//! let use_case = PackageUseCase::new(NpmCli::new(), WalkGlobMatcher, ZipArchiveWriter);
//! let result = use_case.execute(&PackageOptions::from_config(root, &config))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PackageOptions;
pub use result::PackageResult;
pub use use_case::PackageUseCase;
