//! `palette list`: every theme name the configured sources can resolve.

use anyhow::Result;
use palette_core::{PaletteConfig, ThemeSource};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct ThemeEntry {
    name: String,
    source: &'static str,
}

pub fn handle(config: &PaletteConfig) -> Result<()> {
    let source = config.theme_source();
    let directory_names = match source.directory() {
        Some(directory) => match directory.theme_names() {
            Ok(names) => names,
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    dir = %directory.root().display(),
                    "Themes directory does not exist"
                );
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        },
        None => Vec::new(),
    };

    let entries: Vec<ThemeEntry> = source
        .theme_names()?
        .into_iter()
        .map(|name| {
            let origin = if directory_names.contains(&name) {
                "directory"
            } else {
                "bundled"
            };
            ThemeEntry { name, source: origin }
        })
        .collect();

    if output::is_json() {
        output::data("themes", &entries);
        return Ok(());
    }

    output::header("Themes");
    let mut table = output::table(&["Name", "Source"]);
    for entry in &entries {
        table.add_row(vec![output::name_cell(&entry.name), entry.source.into()]);
    }
    output::print_table(&table);

    match source.directory() {
        Some(directory) => {
            output::dim(&format!("Themes directory: {}", directory.root().display()))
        }
        None => output::dim("No themes directory configured"),
    }
    Ok(())
}
