//! Configuration for logging

use serde::{Deserialize, Serialize};

/// Default service name attached to the startup event
pub const DEFAULT_SERVICE_NAME: &str = "palette";

/// How each log line is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; everything else is plain text.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

/// Observability configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded when tracing starts (e.g., "palette")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter (e.g., "info", "palette_core=debug")
    /// Falls back to `RUST_LOG`, then "warn", if not set
    pub log_level: Option<String>,

    /// Write log lines to stderr
    #[serde(default = "default_enable_console")]
    pub enable_console: bool,

    /// Line format for console output
    #[serde(default)]
    pub format: LogFormat,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_enable_console() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            format: LogFormat::Plain,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set line format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `PALETTE_SERVICE_NAME` → service_name
    /// - `PALETTE_LOG` or `RUST_LOG` → log_level
    /// - `PALETTE_LOG_FORMAT` → format
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("PALETTE_SERVICE_NAME").unwrap_or_else(|_| default_service_name());

        let log_level = std::env::var("PALETTE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        let format = std::env::var("PALETTE_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self {
            service_name,
            log_level,
            enable_console: true,
            format,
        }
    }
}
