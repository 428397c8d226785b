//! JSON Event Sink
//!
//! Outputs package events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PackageEvent, PackageEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PackageEventSink for JsonEventSink {
    fn on_event(&self, event: PackageEvent) {
        let json = match event {
            PackageEvent::Started { project_root } => serde_json::json!({
                "event": "start",
                "project_root": project_root.display().to_string(),
            }),

            PackageEvent::DependenciesCollected {
                scope,
                kept,
                duplicates,
            } => serde_json::json!({
                "event": "dependencies",
                "scope": scope,
                "kept": kept,
                "duplicates": duplicates,
            }),

            PackageEvent::FilesResolved { patterns, files } => serde_json::json!({
                "event": "resolved",
                "patterns": patterns,
                "files": files,
            }),

            PackageEvent::Planned { entries } => serde_json::json!({
                "event": "planned",
                "entries": entries,
            }),

            PackageEvent::FileSkipped { source } => serde_json::json!({
                "event": "skipped",
                "source": source,
            }),

            PackageEvent::Completed { bytes, entries } => serde_json::json!({
                "event": "written",
                "bytes": bytes,
                "entries": entries,
            }),
        };

        self.write_event(json);
    }
}
