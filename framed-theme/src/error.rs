//! # Theme Error Types

use thiserror::Error;

/// Errors that can occur while loading colors or palettes.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color value could not be parsed.
    #[error("Invalid color '{value}': {details}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        details: String,
    },

    /// Error deserializing palette data.
    #[error("Failed to parse palette: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details: details.into(),
        }
    }
}
