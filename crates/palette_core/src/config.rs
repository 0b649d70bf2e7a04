//! Configuration for finding themes.
//!
//! Themes are looked up in a user directory first, then in the bundled set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::source::{DirectoryThemes, LayeredThemes};

/// Theme used when none is named.
pub const DEFAULT_THEME: &str = "Breeze";

/// Where to look for themes and which one to use by default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Directory of `.colors` files; `None` means bundled themes only
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,

    /// Theme name used when a caller doesn't give one
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            themes_dir: default_themes_dir(),
            default_theme: default_theme(),
        }
    }
}

/// `<config dir>/palette/themes`, e.g. `~/.config/palette/themes` on Linux.
pub fn default_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("palette").join("themes"))
}

impl PaletteConfig {
    /// Build from environment variables
    ///
    /// Reads:
    /// - `PALETTE_THEMES_DIR` → themes_dir (default: [`default_themes_dir`])
    /// - `PALETTE_THEME` → default_theme (default: `Breeze`)
    pub fn from_env() -> Self {
        let themes_dir = std::env::var_os("PALETTE_THEMES_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(default_themes_dir);

        let default_theme = std::env::var("PALETTE_THEME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_theme);

        Self {
            themes_dir,
            default_theme,
        }
    }

    /// Set the themes directory.
    pub fn with_themes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.themes_dir = Some(dir.into());
        self
    }

    /// Use bundled themes only.
    pub fn without_themes_dir(mut self) -> Self {
        self.themes_dir = None;
        self
    }

    /// Set the default theme name.
    pub fn with_default_theme(mut self, theme: impl Into<String>) -> Self {
        self.default_theme = theme.into();
        self
    }

    /// Theme source for this configuration.
    pub fn theme_source(&self) -> LayeredThemes {
        LayeredThemes::new(self.themes_dir.clone().map(DirectoryThemes::new))
    }
}
