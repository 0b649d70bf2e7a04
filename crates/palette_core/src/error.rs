//! Error types for palette loading.

use thiserror::Error;

/// Errors that can occur while resolving or parsing a theme.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The theme resource is missing or could not be read as text
    #[error("Could not open theme file: {theme}: {source}")]
    ResourceUnreadable {
        theme: String,
        #[source]
        source: std::io::Error,
    },

    /// A recognised key whose value is not an `r,g,b` integer triple
    #[error("Malformed color value for '{key}' on line {line}: '{value}'")]
    MalformedColorValue {
        line: usize,
        key: String,
        value: String,
    },

    /// `ContrastAmount` in the disabled effect section is not a number
    #[error("Malformed contrast amount on line {line}: '{value}'")]
    MalformedContrastAmount { line: usize, value: String },
}

impl PaletteError {
    pub(crate) fn unreadable(theme: impl Into<String>, source: std::io::Error) -> Self {
        PaletteError::ResourceUnreadable {
            theme: theme.into(),
            source,
        }
    }

    /// True when the theme does not exist in the source it was looked up in.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PaletteError::ResourceUnreadable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
