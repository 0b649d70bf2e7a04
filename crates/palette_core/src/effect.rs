//! The `[ColorEffects:Disabled]` recipe used to derive disabled-state colors.

use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::loader::{parse_channels, split_key_value};
use crate::rgb::{blend_channels, Rgb};

pub const DISABLED_SECTION: &str = "[ColorEffects:Disabled]";

/// Base color and blend amount for disabled colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisabledEffect {
    /// Raw channels as written in the theme; not range checked.
    pub color: [i64; 3],
    pub contrast_amount: f64,
}

impl Default for DisabledEffect {
    fn default() -> Self {
        Self {
            color: [128, 128, 128],
            contrast_amount: 0.0,
        }
    }
}

impl DisabledEffect {
    pub fn new(color: Rgb, contrast_amount: f64) -> Self {
        Self {
            color: color.channels(),
            contrast_amount,
        }
    }

    /// Reads the first `[ColorEffects:Disabled]` section of a theme.
    ///
    /// The section ends at the next `[` header; keys after that never affect
    /// the effect. Missing section or keys keep the defaults (gray, 0.0).
    pub fn parse(content: &str) -> Result<Self> {
        let mut effect = Self::default();
        let mut in_section = false;

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line == DISABLED_SECTION {
                in_section = true;
                continue;
            }
            if !in_section {
                continue;
            }
            if line.starts_with('[') {
                break;
            }
            let Some((key, value)) = split_key_value(line) else {
                continue;
            };

            match key {
                "Color" => effect.color = parse_channels(index + 1, key, value)?,
                "ContrastAmount" => {
                    effect.contrast_amount =
                        value
                            .parse()
                            .map_err(|_| PaletteError::MalformedContrastAmount {
                                line: index + 1,
                                value: value.to_string(),
                            })?;
                }
                _ => {}
            }
        }

        debug!(
            color = ?effect.color,
            contrast_amount = effect.contrast_amount,
            "Disabled color effect"
        );
        Ok(effect)
    }

    /// Disabled counterpart of a color given as raw theme channels.
    pub fn apply_channels(&self, source: [i64; 3]) -> Rgb {
        blend_channels(source, self.color, self.contrast_amount)
    }

    pub fn apply(&self, source: Rgb) -> Rgb {
        self.apply_channels(source.channels())
    }
}
