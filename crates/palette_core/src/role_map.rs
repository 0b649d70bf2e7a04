//! Which `(section, key)` pairs of a `.colors` file feed which palette role.

use crate::role::ColorRole;

/// One row of [`COLOR_ROLE_MAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMapping {
    pub section: &'static str,
    pub key: &'static str,
    pub role: ColorRole,
}

const fn map(section: &'static str, key: &'static str, role: ColorRole) -> RoleMapping {
    RoleMapping { section, key, role }
}

/// Theme keys recognised by the loader. Anything else in a theme is ignored.
pub const COLOR_ROLE_MAP: &[RoleMapping] = &[
    map("Colors:Button", "BackgroundNormal", ColorRole::Button),
    map("Colors:Button", "ForegroundNormal", ColorRole::ButtonText),
    map("Colors:Button", "ForegroundActive", ColorRole::BrightText),
    map("Colors:View", "BackgroundNormal", ColorRole::Base),
    map("Colors:View", "BackgroundAlternate", ColorRole::AlternateBase),
    map("Colors:View", "ForegroundNormal", ColorRole::Text),
    map("Colors:View", "ForegroundLink", ColorRole::Link),
    map("Colors:View", "ForegroundVisited", ColorRole::LinkVisited),
    map("Colors:View", "ForegroundInactive", ColorRole::PlaceholderText),
    map("Colors:Selection", "BackgroundNormal", ColorRole::Highlight),
    map("Colors:Selection", "ForegroundNormal", ColorRole::HighlightedText),
    map("Colors:Tooltip", "BackgroundNormal", ColorRole::ToolTipBase),
    map("Colors:Tooltip", "ForegroundNormal", ColorRole::ToolTipText),
    map("Colors:Window", "BackgroundNormal", ColorRole::Window),
    map("Colors:Window", "ForegroundNormal", ColorRole::WindowText),
];

/// Role for a key in a section, if the pair is recognised.
pub fn role_for(section: &str, key: &str) -> Option<ColorRole> {
    COLOR_ROLE_MAP
        .iter()
        .find(|m| m.section == section && m.key == key)
        .map(|m| m.role)
}
