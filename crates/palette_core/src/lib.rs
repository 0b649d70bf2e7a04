//! Palette core: color palettes built from KDE-style `.colors` theme files.
//!
//! A theme file is INI-like text (`[Section]` headers, `Key=Value` lines).
//! Loading one produces a [`Palette`] keyed by ([`ColorGroup`], [`ColorRole`]):
//!
//! - recognised `(section, key)` pairs map to roles through [`COLOR_ROLE_MAP`]
//! - every mapped role gets Normal, Inactive and a blended Disabled color
//! - Light, Dark, Midlight, Mid and Shadow are derived when the theme omits them
//!
//! # Example
//!
//! ```no_run
//! use palette_core::{BundledThemes, ColorGroup, ColorRole, PaletteLoader};
//!
//! let loader = PaletteLoader::new(BundledThemes);
//! let palette = loader.load("Breeze")?;
//! let button = palette.color(ColorGroup::Normal, ColorRole::Button);
//! # Ok::<(), palette_core::PaletteError>(())
//! ```
//!
//! Parsing text that is already in memory skips the theme source entirely:
//!
//! ```
//! use palette_core::{parse_palette, ColorGroup, ColorRole, Rgb};
//!
//! let palette = parse_palette("[Colors:Button]\nBackgroundNormal=200,200,200\n")?;
//! assert_eq!(
//!     palette.color(ColorGroup::Normal, ColorRole::Button),
//!     Some(Rgb(200, 200, 200))
//! );
//! # Ok::<(), palette_core::PaletteError>(())
//! ```

pub mod config;
pub mod effect;
pub mod error;
pub mod loader;
pub mod palette;
pub mod rgb;
pub mod role;
pub mod role_map;
pub mod source;

#[cfg(test)]
mod tests;

pub use config::PaletteConfig;
pub use effect::DisabledEffect;
pub use error::{PaletteError, Result};
pub use loader::{PaletteLoader, apply_fallbacks, parse_palette};
pub use palette::Palette;
pub use rgb::{Rgb, blend, blend_channels, clamp8};
pub use role::{ColorGroup, ColorRole};
pub use role_map::{COLOR_ROLE_MAP, RoleMapping, role_for};
pub use source::{BundledThemes, DirectoryThemes, LayeredThemes, ThemeSource};
