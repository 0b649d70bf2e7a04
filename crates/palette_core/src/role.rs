//! Palette axes: what a color is for ([`ColorRole`]) and which widget state
//! it applies to ([`ColorGroup`]).

use std::fmt;

use serde::Serialize;

/// Abstract palette role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    PlaceholderText,
    Text,
    Button,
    ButtonText,
    BrightText,
    Light,
    Midlight,
    Dark,
    Mid,
    Shadow,
    Highlight,
    HighlightedText,
    Link,
    LinkVisited,
}

impl ColorRole {
    pub const ALL: [ColorRole; 20] = [
        ColorRole::Window,
        ColorRole::WindowText,
        ColorRole::Base,
        ColorRole::AlternateBase,
        ColorRole::ToolTipBase,
        ColorRole::ToolTipText,
        ColorRole::PlaceholderText,
        ColorRole::Text,
        ColorRole::Button,
        ColorRole::ButtonText,
        ColorRole::BrightText,
        ColorRole::Light,
        ColorRole::Midlight,
        ColorRole::Dark,
        ColorRole::Mid,
        ColorRole::Shadow,
        ColorRole::Highlight,
        ColorRole::HighlightedText,
        ColorRole::Link,
        ColorRole::LinkVisited,
    ];

    /// Roles derived after parsing when a theme leaves them out.
    pub const DERIVED: [ColorRole; 5] = [
        ColorRole::Light,
        ColorRole::Dark,
        ColorRole::Midlight,
        ColorRole::Mid,
        ColorRole::Shadow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Window => "Window",
            ColorRole::WindowText => "WindowText",
            ColorRole::Base => "Base",
            ColorRole::AlternateBase => "AlternateBase",
            ColorRole::ToolTipBase => "ToolTipBase",
            ColorRole::ToolTipText => "ToolTipText",
            ColorRole::PlaceholderText => "PlaceholderText",
            ColorRole::Text => "Text",
            ColorRole::Button => "Button",
            ColorRole::ButtonText => "ButtonText",
            ColorRole::BrightText => "BrightText",
            ColorRole::Light => "Light",
            ColorRole::Midlight => "Midlight",
            ColorRole::Dark => "Dark",
            ColorRole::Mid => "Mid",
            ColorRole::Shadow => "Shadow",
            ColorRole::Highlight => "Highlight",
            ColorRole::HighlightedText => "HighlightedText",
            ColorRole::Link => "Link",
            ColorRole::LinkVisited => "LinkVisited",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget state a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    /// Focused window, enabled widget.
    #[default]
    Normal,
    /// Unfocused window. Theme files don't distinguish it from Normal.
    Inactive,
    Disabled,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 3] = [ColorGroup::Normal, ColorGroup::Inactive, ColorGroup::Disabled];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorGroup::Normal => "normal",
            ColorGroup::Inactive => "inactive",
            ColorGroup::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
