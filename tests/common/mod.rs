//! Common test utilities for Packagr CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated workspace with an `api` project and a sibling
//!   `users` service, plus helpers to run the `packagr` binary
//! - Fixtures: config and manifest content shared by tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
