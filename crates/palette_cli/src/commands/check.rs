//! `palette check`: load themes and report which ones fail.

use std::time::Instant;

use anyhow::{Result, bail};
use palette_core::{PaletteConfig, PaletteLoader, ThemeSource};
use palette_observability::{record_duration, record_error, theme_span};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct CheckResult {
    theme: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn handle(config: &PaletteConfig, themes: Vec<String>) -> Result<()> {
    let loader = PaletteLoader::new(config.theme_source());
    let themes = if themes.is_empty() {
        loader.source().theme_names()?
    } else {
        themes
    };

    let results: Vec<CheckResult> = themes
        .into_iter()
        .map(|theme| {
            let span = theme_span!(theme.as_str(), "check");
            let _guard = span.enter();
            let start = Instant::now();
            let loaded = loader.load(&theme);
            record_duration("duration_ms", start.elapsed());
            match loaded {
                Ok(_) => CheckResult {
                    theme,
                    ok: true,
                    error: None,
                },
                Err(e) => {
                    record_error(&e);
                    CheckResult {
                        theme,
                        ok: false,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let failed = results.iter().filter(|r| !r.ok).count();

    if output::is_json() {
        output::data("check", &results);
    } else {
        for result in &results {
            match &result.error {
                None => output::success(&result.theme),
                Some(e) => output::error(&format!("{}: {e}", result.theme)),
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} themes failed to load", results.len());
    }
    Ok(())
}
