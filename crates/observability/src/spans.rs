//! Span helpers for palette operations

/// Create a span for a theme operation
///
/// Use this around anything that resolves or loads a theme, so events from
/// the loader carry the theme name.
///
/// # Example
///
/// ```rust
/// use palette_observability::theme_span;
///
/// let span = theme_span!("Breeze", "load");
/// let _guard = span.enter();
/// // ... load the palette ...
/// ```
#[macro_export]
macro_rules! theme_span {
    ($theme:expr, $operation:expr) => {
        tracing::info_span!(
            "theme.operation",
            theme.name = $theme,
            operation = $operation,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Marks the span as failed and logs the error message.
///
/// # Example
///
/// ```rust
/// use palette_observability::record_error;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing theme");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use palette_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... operation ...
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
