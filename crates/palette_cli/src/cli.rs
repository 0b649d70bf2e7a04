//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use palette_core::ColorGroup;

/// Inspect KDE-style .colors themes and the palettes they produce
#[derive(Parser)]
#[command(name = "palette", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory of .colors files (overrides PALETTE_THEMES_DIR)
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Normal,
    Inactive,
    Disabled,
}

impl From<GroupArg> for ColorGroup {
    fn from(group: GroupArg) -> Self {
        match group {
            GroupArg::Normal => ColorGroup::Normal,
            GroupArg::Inactive => ColorGroup::Inactive,
            GroupArg::Disabled => ColorGroup::Disabled,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a theme and print its palette
    Show {
        /// Theme name (default: PALETTE_THEME, then Breeze)
        theme: Option<String>,
        /// Only show one group
        #[arg(short, long)]
        group: Option<GroupArg>,
    },
    /// List available themes
    List,
    /// Load themes and report any that fail
    Check {
        /// Theme names to check (default: every available theme)
        themes: Vec<String>,
    },
}
