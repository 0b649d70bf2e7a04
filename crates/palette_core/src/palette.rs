//! Palette: colors by (role, group).

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::rgb::Rgb;
use crate::role::{ColorGroup, ColorRole};

/// A full set of colors for one theme.
///
/// Built once by the loader and handed to the caller; nothing here is shared
/// between loads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<(ColorRole, ColorGroup), Rgb>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Option<Rgb> {
        self.colors.get(&(role, group)).copied()
    }

    pub fn set_color(&mut self, group: ColorGroup, role: ColorRole, color: Rgb) {
        self.colors.insert((role, group), color);
    }

    /// Same color for Normal, Inactive and Disabled.
    pub fn set_all_groups(&mut self, role: ColorRole, color: Rgb) {
        for group in ColorGroup::ALL {
            self.set_color(group, role, color);
        }
    }

    /// Whether the role has a Normal color.
    pub fn has_role(&self, role: ColorRole) -> bool {
        self.colors.contains_key(&(role, ColorGroup::Normal))
    }

    /// Roles with at least one color, in [`ColorRole`] order.
    pub fn roles(&self) -> impl Iterator<Item = ColorRole> + '_ {
        let mut last = None;
        self.colors.keys().filter_map(move |(role, _)| {
            if last == Some(*role) {
                None
            } else {
                last = Some(*role);
                Some(*role)
            }
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, ColorGroup, Rgb)> + '_ {
        self.colors
            .iter()
            .map(|(&(role, group), &color)| (role, group, color))
    }

    /// Copy holding only the given groups.
    pub fn filter_groups(&self, groups: &[ColorGroup]) -> Palette {
        let colors = self
            .colors
            .iter()
            .filter(|((_, group), _)| groups.contains(group))
            .map(|(&key, &color)| (key, color))
            .collect();
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Serialises as `{ "button": { "normal": "#rrggbb", ... }, ... }`.
impl Serialize for Palette {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut by_role: BTreeMap<ColorRole, BTreeMap<ColorGroup, Rgb>> = BTreeMap::new();
        for (role, group, color) in self.iter() {
            by_role.entry(role).or_default().insert(group, color);
        }
        let mut map = serializer.serialize_map(Some(by_role.len()))?;
        for (role, groups) in &by_role {
            map.serialize_entry(role, groups)?;
        }
        map.end()
    }
}
