//! Observability middleware.
//!
//! Sets up the tracing subscriber used by the whole process.

use crate::config::LogFormat;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing.
///
/// RUST_LOG wins when set; otherwise `default_level` is used. Output goes to
/// stderr without ANSI colours, as plain text or one JSON object per line.
/// Calling this twice is harmless: the second subscriber is rejected and an
/// error is returned.
pub fn init_observability(
    default_level: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match format {
        LogFormat::Text => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }

    info!(
        "Observability initialized (log level fallback: {}, format: {:?})",
        default_level, format
    );
    Ok(())
}
