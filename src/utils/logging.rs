//! Tracing subscriber setup for the command-line binary

use std::error::Error;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// Install the global stderr subscriber
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging(
    level: &str,
    format: LogFormat,
) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
}

/// Map a configured level name to an `EnvFilter` directive
fn filter_directive(level: &str) -> &str {
    match level {
        "none" => "off",
        other => other,
    }
}
