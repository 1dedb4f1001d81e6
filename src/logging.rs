//! Structured logging setup
//!
//! Logs go to stderr so stdout only ever carries the command or JSON the
//! user asked for. `RUST_LOG` wins over `--debug`.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Install the global tracing subscriber.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(format: LogFormat, debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_target(false).try_init(),
    };
}
