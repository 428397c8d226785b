//! Command handlers for the `packagr` binary

pub mod package;
