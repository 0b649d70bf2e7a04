//! Fields written onto the theme span by the span helpers.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use palette_observability::{record_duration, record_error, theme_span};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

type Fields = Arc<Mutex<Vec<(String, String)>>>;

/// Collects every span field value as `(name, debug text)`.
struct FieldRecorder(Fields);

struct Collect<'a>(&'a mut Vec<(String, String)>);

impl Visit for Collect<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: Subscriber> Layer<S> for FieldRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        attrs.record(&mut Collect(&mut self.0.lock().unwrap()));
    }

    fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        values.record(&mut Collect(&mut self.0.lock().unwrap()));
    }
}

fn recorded(run: impl FnOnce()) -> Vec<(String, String)> {
    let fields = Fields::default();
    let subscriber = Registry::default().with(FieldRecorder(fields.clone()));
    tracing::subscriber::with_default(subscriber, run);
    let fields = fields.lock().unwrap();
    fields.clone()
}

fn has(fields: &[(String, String)], name: &str, value: &str) -> bool {
    fields.iter().any(|(n, v)| n == name && v == value)
}

#[test]
fn test_duration_recorded_on_theme_span() {
    let fields = recorded(|| {
        let span = theme_span!("Breeze", "load");
        let _guard = span.enter();
        record_duration("duration_ms", Duration::from_millis(42));
    });

    assert!(has(&fields, "theme.name", "\"Breeze\""), "{fields:?}");
    assert!(has(&fields, "operation", "\"load\""), "{fields:?}");
    assert!(has(&fields, "duration_ms", "42"), "{fields:?}");
}

#[test]
fn test_error_recorded_on_theme_span() {
    let fields = recorded(|| {
        let span = theme_span!("Missing", "check");
        let _guard = span.enter();
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such theme");
        record_error(&err);
    });

    assert!(has(&fields, "error", "true"), "{fields:?}");
    assert!(has(&fields, "error.message", "\"no such theme\""), "{fields:?}");
}
