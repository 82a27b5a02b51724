//! Logging setup for the binaries.
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set. Fails if a global subscriber is already
/// installed.
pub fn init(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false)
                .with_thread_names(true),
        )
        .try_init()?;

    debug!(filter = level, "logging initialized");
    Ok(())
}
