//! Where theme text comes from: a directory on disk, the themes compiled into
//! the crate, or both.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{PaletteError, Result};

/// File extension of KDE color scheme files.
pub const THEME_EXTENSION: &str = "colors";

/// Resolves a theme name to its text.
pub trait ThemeSource {
    /// Full text of the named theme. Missing or unreadable themes fail with
    /// [`PaletteError::ResourceUnreadable`].
    fn read_theme(&self, name: &str) -> Result<String>;

    /// Names this source can resolve, sorted.
    fn theme_names(&self) -> Result<Vec<String>>;
}

impl<T: ThemeSource + ?Sized> ThemeSource for &T {
    fn read_theme(&self, name: &str) -> Result<String> {
        (**self).read_theme(name)
    }

    fn theme_names(&self) -> Result<Vec<String>> {
        (**self).theme_names()
    }
}

/// Themes stored as files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryThemes {
    root: PathBuf,
}

impl DirectoryThemes {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for a theme name: `root/name`, or `root/name.colors` when the
    /// bare name isn't a file and has no extension of its own.
    ///
    /// Names must be a single file name. Anything with a separator, `..` or
    /// a root never resolves, so lookups stay inside the root.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if !is_plain_name(name) {
            return None;
        }
        let exact = self.root.join(name);
        if exact.is_file() {
            return Some(exact);
        }
        if Path::new(name).extension().is_none() {
            let with_ext = self.root.join(format!("{name}.{THEME_EXTENSION}"));
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }
        None
    }
}

/// Exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

impl ThemeSource for DirectoryThemes {
    fn read_theme(&self, name: &str) -> Result<String> {
        if !is_plain_name(name) {
            return Err(PaletteError::unreadable(
                name,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("theme name '{name}' must not contain a path"),
                ),
            ));
        }
        let path = self.resolve(name).ok_or_else(|| {
            PaletteError::unreadable(
                name,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no theme named '{name}' in {}", self.root.display()),
                ),
            )
        })?;
        debug!(path = %path.display(), "Reading theme file");
        fs::read_to_string(&path).map_err(|e| PaletteError::unreadable(name, e))
    }

    fn theme_names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| PaletteError::unreadable(self.root.display().to_string(), e))?;
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(THEME_EXTENSION)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

const BUNDLED: &[(&str, &str)] = &[
    ("Breeze", include_str!("../themes/Breeze.colors")),
    ("BreezeDark", include_str!("../themes/BreezeDark.colors")),
];

/// Themes shipped inside the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledThemes;

impl BundledThemes {
    fn lookup(name: &str) -> Option<&'static str> {
        let stem = name
            .strip_suffix(THEME_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(name);
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == stem)
            .map(|(_, text)| *text)
    }
}

impl ThemeSource for BundledThemes {
    fn read_theme(&self, name: &str) -> Result<String> {
        Self::lookup(name).map(str::to_string).ok_or_else(|| {
            PaletteError::unreadable(
                name,
                io::Error::new(io::ErrorKind::NotFound, "no bundled theme with this name"),
            )
        })
    }

    fn theme_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = BUNDLED.iter().map(|(n, _)| n.to_string()).collect();
        names.sort();
        Ok(names)
    }
}

/// A user theme directory layered over the bundled themes. Directory themes
/// shadow bundled ones of the same name.
#[derive(Debug, Clone, Default)]
pub struct LayeredThemes {
    directory: Option<DirectoryThemes>,
    bundled: BundledThemes,
}

impl LayeredThemes {
    pub fn new(directory: Option<DirectoryThemes>) -> Self {
        Self {
            directory,
            bundled: BundledThemes,
        }
    }

    pub fn directory(&self) -> Option<&DirectoryThemes> {
        self.directory.as_ref()
    }

    pub fn bundled(&self) -> &BundledThemes {
        &self.bundled
    }
}

impl ThemeSource for LayeredThemes {
    fn read_theme(&self, name: &str) -> Result<String> {
        if let Some(directory) = &self.directory {
            match directory.read_theme(name) {
                Err(e) if e.is_not_found() => {}
                other => return other,
            }
        }
        self.bundled.read_theme(name)
    }

    fn theme_names(&self) -> Result<Vec<String>> {
        let mut names = self.bundled.theme_names()?;
        if let Some(directory) = &self.directory {
            match directory.theme_names() {
                Ok(found) => names.extend(found),
                // A configured but not yet created directory is not an error.
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}
