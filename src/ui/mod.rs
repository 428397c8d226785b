//! Terminal and NDJSON presentation for the `packagr` binary

pub mod ci;
pub mod error;
pub mod json;
pub mod logging;
pub mod output;
pub mod terminal;
