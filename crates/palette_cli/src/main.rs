//! CLI entry point for the palette tools.

mod cli;
mod commands;
mod output;

use clap::Parser;
use palette_core::PaletteConfig;
use palette_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Theme configuration: environment first, then command-line overrides.
fn load_palette_config(cli: &Cli) -> PaletteConfig {
    let config = PaletteConfig::from_env();
    match &cli.themes_dir {
        Some(dir) => config.with_themes_dir(dir),
        None => config,
    }
}

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env();
    if verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = palette_observability::init(config) {
        output::warning(&format!("Logging disabled: {e}"));
    }
}

fn main() {
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    let config = load_palette_config(&cli);
    if let Err(e) = commands::handle(cli.command, &config) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
