//! Structured logging setup for the binaries.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Log level for a `-v` count: warn, info, debug, trace.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flag. Output goes to stderr so plan and
/// JSON output on stdout stay clean. Calling this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
