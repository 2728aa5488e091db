use serde::Deserialize;
use vello::peniko::Color;

use crate::error::ThemeResult;

/// Default colors handed to widgets through the application context.
///
/// Widgets read their fallback colors from here instead of hard-coding them,
/// so a host can swap the palette without touching widget code.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Palette {
    /// Text color.
    #[serde(with = "crate::color", default = "Palette::default_text")]
    pub text: Color,
    /// Border/outline color.
    #[serde(with = "crate::color", default = "Palette::default_border")]
    pub border: Color,
    /// Idle button background.
    #[serde(with = "crate::color", default = "Palette::default_button")]
    pub button: Color,
    /// Pressed button background.
    #[serde(with = "crate::color", default = "Palette::default_button_pressed")]
    pub button_pressed: Color,
}

impl Palette {
    /// Parse a palette from TOML. Missing entries keep their defaults.
    ///
    /// ```toml
    /// text = "#202020"
    /// border = "#ff0000"
    /// ```
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(source)?)
    }

    fn default_text() -> Color {
        Color::from_rgb8(0, 0, 0)
    }

    fn default_border() -> Color {
        Color::from_rgb8(0, 0, 255)
    }

    fn default_button() -> Color {
        Color::from_rgb8(220, 220, 220)
    }

    fn default_button_pressed() -> Color {
        Color::from_rgb8(180, 180, 180)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Self::default_text(),
            border: Self::default_border(),
            button: Self::default_button(),
            button_pressed: Self::default_button_pressed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.text.to_rgba8().r, 0);
        assert_eq!(palette.border.to_rgba8().b, 255);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let palette = Palette::from_toml_str("border = \"#ff0000\"").unwrap();
        let border = palette.border.to_rgba8();
        assert_eq!((border.r, border.g, border.b), (255, 0, 0));
        assert_eq!(palette.text.to_rgba8().a, 255);
    }

    #[test]
    fn test_bad_color_is_an_error() {
        assert!(Palette::from_toml_str("text = \"blue\"").is_err());
    }
}
