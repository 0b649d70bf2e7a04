//! Theme text to [`Palette`].
//!
//! Two passes over the lines of a theme: the first reads the disabled color
//! effect, the second assigns every recognised key to its role in all three
//! groups. Roles the theme leaves out that widgets still need (Light, Dark,
//! Midlight, Mid, Shadow) are then derived from Button and Window.

use tracing::{instrument, trace, warn};

use crate::effect::DisabledEffect;
use crate::error::{PaletteError, Result};
use crate::palette::Palette;
use crate::rgb::Rgb;
use crate::role::{ColorGroup, ColorRole};
use crate::role_map::role_for;
use crate::source::ThemeSource;

/// Factor for Light (from Button) and Dark (from Window).
pub const FALLBACK_SHADE_FACTOR: i32 = 150;

/// Loads palettes by theme name from a [`ThemeSource`].
#[derive(Debug, Clone, Default)]
pub struct PaletteLoader<S> {
    source: S,
}

impl<S: ThemeSource> PaletteLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read the named theme and build its palette.
    ///
    /// Fails with [`PaletteError::ResourceUnreadable`] when the theme can't be
    /// read, or with a parse error when a recognised value is malformed. No
    /// partial palette is returned.
    #[instrument(name = "load_palette", skip(self))]
    pub fn load(&self, theme: &str) -> Result<Palette> {
        let content = self.source.read_theme(theme)?;
        parse_palette(&content)
    }
}

/// Build a palette from theme text.
pub fn parse_palette(content: &str) -> Result<Palette> {
    let effect = DisabledEffect::parse(content)?;
    let mut palette = Palette::new();
    let mut section: Option<&str> = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('[') && line.ends_with(']') {
            section = Some(&line[1..line.len() - 1]);
            continue;
        }
        let Some((key, value)) = split_key_value(line) else {
            continue;
        };
        let Some(role) = section.and_then(|s| role_for(s, key)) else {
            trace!(section = ?section, key, "Ignoring unrecognised key");
            continue;
        };

        let channels = parse_channels(index + 1, key, value)?;
        let color = Rgb::from_channels(channels);
        palette.set_color(ColorGroup::Normal, role, color);
        palette.set_color(ColorGroup::Inactive, role, color);
        palette.set_color(ColorGroup::Disabled, role, effect.apply_channels(channels));
    }

    apply_fallbacks(&mut palette);
    Ok(palette)
}

/// Fill derived roles the theme did not set. Explicit values are never
/// replaced; derived colors are the same in every group.
pub fn apply_fallbacks(palette: &mut Palette) {
    if !palette.has_role(ColorRole::Light) {
        let button = source_color(palette, ColorRole::Button);
        palette.set_all_groups(ColorRole::Light, button.lighter(FALLBACK_SHADE_FACTOR));
    }

    if !palette.has_role(ColorRole::Dark) {
        let window = source_color(palette, ColorRole::Window);
        palette.set_all_groups(ColorRole::Dark, window.darker(FALLBACK_SHADE_FACTOR));
    }

    if !palette.has_role(ColorRole::Midlight) {
        let light = source_color(palette, ColorRole::Light);
        let button = source_color(palette, ColorRole::Button);
        palette.set_all_groups(ColorRole::Midlight, light.average(button));
    }

    if !palette.has_role(ColorRole::Mid) {
        let dark = source_color(palette, ColorRole::Dark);
        let button = source_color(palette, ColorRole::Button);
        palette.set_all_groups(ColorRole::Mid, dark.average(button));
    }

    if !palette.has_role(ColorRole::Shadow) {
        palette.set_all_groups(ColorRole::Shadow, Rgb::BLACK);
    }
}

fn source_color(palette: &Palette, role: ColorRole) -> Rgb {
    palette
        .color(ColorGroup::Normal, role)
        .unwrap_or_else(|| {
            warn!(role = %role, "Theme has no color for fallback source, using black");
            Rgb::BLACK
        })
}

/// `Key=Value` split at the first `=`, both sides trimmed.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// `r,g,b` as three integers. Range is not checked here.
pub(crate) fn parse_channels(line: usize, key: &str, value: &str) -> Result<[i64; 3]> {
    let malformed = || PaletteError::MalformedColorValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    };

    let mut channels = [0i64; 3];
    let mut parts = value.split(',');
    for channel in channels.iter_mut() {
        let part = parts.next().ok_or_else(malformed)?;
        *channel = part.trim().parse().map_err(|_| malformed())?;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(channels)
}
