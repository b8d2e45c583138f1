use std::io;

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive.
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set; otherwise the `-v` count picks the level.
/// * Writes to stderr so the report on stdout stays clean.
/// * Strips timestamps and target names.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

    // Keeps the first subscriber if one is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
