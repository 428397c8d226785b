//! Event Sink Implementations
//!
//! Provides concrete implementations of PackageEventSink:
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::JsonEventSink;
