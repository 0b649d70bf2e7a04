//! Palette observability: tracing setup shared by the palette tools.
//!
//! # Quick Start
//!
//! ```no_run
//! use palette_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("palette")
//!     .with_log_level("debug");
//!
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), palette_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `PALETTE_SERVICE_NAME` - Service name attached to the startup event
//! - `PALETTE_LOG` or `RUST_LOG` - Log level filter
//! - `PALETTE_LOG_FORMAT` - `json` for one JSON object per line, anything else for plain text

pub mod config;
pub mod error;
pub mod telemetry;
pub mod spans;

pub use config::{LogFormat, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::init;
pub use spans::{record_duration, record_error};

// `theme_span!` is exported at the crate root via #[macro_export].
