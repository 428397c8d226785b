//! NDJSON output for `--json` mode
//!
//! Progress events come from `JsonEventSink`; the helpers here build the
//! final summary event and the out-of-band ones (warnings, errors).

use std::io::{self, Write};

use packagr::application::PackageResult;
use packagr::config::ConfigWarning;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Final event of a run: `packaged`, or `plan` on a dry run
pub fn result_event(result: &PackageResult) -> serde_json::Value {
    match &result.archive {
        Some(report) => serde_json::json!({
            "event": "packaged",
            "archive": report.archive.display().to_string(),
            "bytes": report.bytes,
            "entries": report.written,
            "skipped": report.skipped,
            "sha256": report.digest.hex(),
        }),
        None => {
            let entries: Vec<serde_json::Value> = result
                .plan
                .iter()
                .map(|(source, destination)| {
                    serde_json::json!({ "source": source, "destination": destination })
                })
                .collect();
            serde_json::json!({
                "event": "plan",
                "dependencies": result.dependencies.len(),
                "entries": entries,
            })
        }
    }
}

pub fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "key": warning.path,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}
