//! Structured logging setup
//!
//! Logs go to stderr so stdout stays reserved for results (and NDJSON in
//! `--json` mode). `RUST_LOG` wins over the `-v` count when set.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Level selected by the number of `-v` flags
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter used when `RUST_LOG` is unset
fn default_filter(verbose: u8) -> EnvFilter {
    let level = level_for_verbosity(verbose);
    EnvFilter::new(format!("warn,packagr={}", level))
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: u8, ansi: bool) {
    INIT.call_once(|| {
        let filter = match std::env::var("RUST_LOG") {
            Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
            _ => default_filter(verbose),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi)
                    .with_target(verbose >= 2),
            )
            .init();
    });
}
