//! Subscriber installation. Kept in its own test binary: the global
//! subscriber can only be set once per process.

use palette_observability::{ObservabilityConfig, ObservabilityError, init, theme_span};

#[test]
fn test_init_once() {
    let bad = ObservabilityConfig::new("palette").with_log_level("palette=loud");
    assert!(matches!(init(bad), Err(ObservabilityError::Config(_))));

    let config = ObservabilityConfig::new("palette").with_log_level("debug");
    init(config.clone()).unwrap();

    let span = theme_span!("Breeze", "load");
    let _guard = span.enter();
    tracing::debug!("inside theme span");

    assert!(matches!(init(config), Err(ObservabilityError::AlreadyInitialized)));
}
