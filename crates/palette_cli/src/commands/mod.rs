//! Command dispatch.

pub mod check;
pub mod list;
pub mod show;

use anyhow::Result;
use palette_core::PaletteConfig;

use crate::cli::Command;

pub fn handle(command: Command, config: &PaletteConfig) -> Result<()> {
    match command {
        Command::Show { theme, group } => show::handle(config, theme, group.map(Into::into)),
        Command::List => list::handle(config),
        Command::Check { themes } => check::handle(config, themes),
    }
}
