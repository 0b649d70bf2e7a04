//! `palette show`: load one theme and print its palette.

use std::time::Instant;

use anyhow::{Context, Result};
use palette_core::{ColorGroup, ColorRole, Palette, PaletteConfig, PaletteLoader};
use palette_observability::{record_duration, theme_span};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct ShowOutput<'a> {
    theme: &'a str,
    roles: &'a Palette,
}

pub fn handle(
    config: &PaletteConfig,
    theme: Option<String>,
    group: Option<ColorGroup>,
) -> Result<()> {
    let theme = theme.unwrap_or_else(|| config.default_theme.clone());
    let span = theme_span!(theme.as_str(), "show");
    let _guard = span.enter();

    let loader = PaletteLoader::new(config.theme_source());
    let start = Instant::now();
    let loaded = loader.load(&theme);
    record_duration("duration_ms", start.elapsed());
    let palette = loaded.with_context(|| format!("Failed to load theme '{theme}'"))?;

    let groups: Vec<ColorGroup> = match group {
        Some(g) => vec![g],
        None => ColorGroup::ALL.to_vec(),
    };

    if output::is_json() {
        let roles = palette.filter_groups(&groups);
        output::data(
            "palette",
            &ShowOutput {
                theme: &theme,
                roles: &roles,
            },
        );
        return Ok(());
    }

    output::header(&format!("Palette: {theme}"));
    let mut headers = vec!["Role"];
    headers.extend(groups.iter().map(|g| g.as_str()));
    let mut table = output::table(&headers);

    for role in ColorRole::ALL {
        if !palette.roles().any(|r| r == role) {
            continue;
        }
        let mut row = vec![output::name_cell(role.as_str())];
        row.extend(groups.iter().map(|&g| output::color_cell(palette.color(g, role))));
        table.add_row(row);
    }
    output::print_table(&table);

    let derived: Vec<&str> = ColorRole::DERIVED.iter().map(|r| r.as_str()).collect();
    output::dim(&format!("Derived when missing: {}", derived.join(", ")));
    Ok(())
}
