//! Color parsing and serialization for [vello::peniko::Color].
//!
//! Hex strings follow the markup convention `#RRGGBB` or `#AARRGGBB` (alpha first),
//! and packed integers are `0xAARRGGBB`. The module also works as a serde `with`
//! module: `#[serde(with = "framed_theme::color")]`.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Build a color from a packed `0xAARRGGBB` integer.
pub fn from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Build a color from a signed integer as found in markup.
///
/// Negative values are read as the two's complement of a 32-bit `AARRGGBB` value
/// (`-16776961` is opaque blue). Values that fit in neither form yield [None].
pub fn from_argb_i64(value: i64) -> Option<Color> {
    if let Ok(argb) = u32::try_from(value) {
        return Some(from_argb(argb));
    }
    i32::try_from(value).ok().map(|signed| from_argb(signed as u32))
}

/// Pack a color into `0xAARRGGBB`.
pub fn to_argb(color: Color) -> u32 {
    let rgba = color.to_rgba8();
    u32::from_be_bytes([rgba.a, rgba.r, rgba.g, rgba.b])
}

/// Parse `#RRGGBB` or `#AARRGGBB`. The leading `#` is optional.
pub fn parse_hex_color(value: &str) -> ThemeResult<Color> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ThemeError::invalid_color(value, "not a hex number"));
    }

    let packed = u32::from_str_radix(hex, 16)
        .map_err(|e| ThemeError::invalid_color(value, e.to_string()))?;

    match hex.len() {
        6 => Ok(from_argb(0xFF00_0000 | packed)),
        8 => Ok(from_argb(packed)),
        _ => Err(ThemeError::invalid_color(
            value,
            "hex color must be 6 or 8 characters",
        )),
    }
}

/// Format a color as `#RRGGBB`, or `#AARRGGBB` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.a, rgba.r, rgba.g, rgba.b)
    }
}

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_is_opaque() {
        let color = parse_hex_color("#0000ff").unwrap().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (0, 0, 255, 255));
    }

    #[test]
    fn test_parse_alpha_comes_first() {
        let color = parse_hex_color("80ff0000").unwrap().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (255, 0, 0, 128));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_signed_markup_integer() {
        // 0xFF0000FF as a 32-bit signed int
        let color = from_argb_i64(-16776961).unwrap();
        assert_eq!(to_argb(color), 0xFF00_00FF);
        assert!(from_argb_i64(i64::MAX).is_none());
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(to_hex(from_argb(0xFF00_00FF)), "#0000ff");
        assert_eq!(to_hex(from_argb(0x7F11_2233)), "#7f112233");
    }
}
