//! `ObservabilityConfig::from_env`. One test per binary: it changes process env.

use palette_observability::config::DEFAULT_SERVICE_NAME;
use palette_observability::{LogFormat, ObservabilityConfig};

#[test]
fn test_from_env() {
    // SAFETY: this is the only test in this binary, nothing else reads env.
    unsafe {
        std::env::set_var("PALETTE_SERVICE_NAME", "palette-test");
        std::env::set_var("PALETTE_LOG", "palette_core=trace");
        std::env::set_var("RUST_LOG", "info");
        std::env::set_var("PALETTE_LOG_FORMAT", "JSON");
    }
    let config = ObservabilityConfig::from_env();
    assert_eq!(config.service_name, "palette-test");
    assert_eq!(config.log_level.as_deref(), Some("palette_core=trace"));
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.enable_console);

    // RUST_LOG is used when PALETTE_LOG is unset
    unsafe {
        std::env::remove_var("PALETTE_LOG");
        std::env::set_var("PALETTE_LOG_FORMAT", "pretty");
    }
    let config = ObservabilityConfig::from_env();
    assert_eq!(config.log_level.as_deref(), Some("info"));
    assert_eq!(config.format, LogFormat::Plain);

    unsafe {
        std::env::remove_var("PALETTE_SERVICE_NAME");
        std::env::remove_var("RUST_LOG");
        std::env::remove_var("PALETTE_LOG_FORMAT");
    }
    let config = ObservabilityConfig::from_env();
    assert_eq!(config, ObservabilityConfig::default());
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
}
