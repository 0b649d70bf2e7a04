//! Tracing subscriber initialization
//!
//! Console logging to stderr, filtered with `EnvFilter`, in plain or JSON lines.

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::ObservabilityError;

/// Filter used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_FILTER: &str = "warn";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Build the level filter for a configuration.
///
/// An explicit `log_level` wins, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match &config.log_level {
        Some(level) => EnvFilter::try_new(level.as_str())
            .map_err(|e| ObservabilityError::Config(format!("invalid log level '{level}': {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initialize tracing with the given configuration
///
/// # Returns
///
/// Returns `Ok(())` on success, [`ObservabilityError::AlreadyInitialized`] on a
/// second call, or another error if the filter is invalid or a different
/// global subscriber is already installed
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = env_filter(&config)?;

    if INITIALIZED.set(()).is_err() {
        return Err(ObservabilityError::AlreadyInitialized);
    }

    // Build layers separately, then compose once to avoid type mismatch
    let plain_layer = (config.enable_console && config.format == LogFormat::Plain)
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(true));

    let json_layer = (config.enable_console && config.format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
    });

    Registry::default()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        format = ?config.format,
        "Tracing initialized"
    );

    Ok(())
}
