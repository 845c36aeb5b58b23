//! Serializable RGBA colour with CSS parsing and SVG formatting.

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Whether the color is fully transparent (exported as `none`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha as a 0.0..=1.0 opacity value.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Format as `#rrggbb`. Alpha is not included; see [`Self::opacity`].
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a CSS color value.
    ///
    /// Accepts everything CSS Color 4 does (hex forms, named colors,
    /// `rgb()`, `hsl()` and friends, `transparent`) plus the SVG paint
    /// keyword `none`. Returns `None` for anything else so callers can fall
    /// back to a default.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if !value.is_ascii() {
            return None;
        }
        if value == "none" {
            return Some(Self::transparent());
        }
        let color = parse_color(&value).ok()?;
        Some(color.to_alpha_color::<Srgb>().into())
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(SerializableColor::parse("#fff"), Some(SerializableColor::white()));
        assert_eq!(
            SerializableColor::parse("#FF000080"),
            Some(SerializableColor::new(255, 0, 0, 128))
        );
        assert_eq!(
            SerializableColor::parse("#1a2b3c"),
            Some(SerializableColor::new(0x1a, 0x2b, 0x3c, 255))
        );
        assert_eq!(SerializableColor::parse("#12345"), None);
    }

    #[test]
    fn test_parse_color_functions() {
        assert_eq!(
            SerializableColor::parse("rgb(10, 20, 30)"),
            Some(SerializableColor::new(10, 20, 30, 255))
        );
        assert_eq!(
            SerializableColor::parse("rgba(255,0,0,0.6)"),
            Some(SerializableColor::new(255, 0, 0, 153))
        );
        assert_eq!(
            SerializableColor::parse("hsl(120, 100%, 50%)"),
            Some(SerializableColor::new(0, 255, 0, 255))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(SerializableColor::parse("none"), Some(SerializableColor::transparent()));
        assert_eq!(SerializableColor::parse("transparent"), Some(SerializableColor::transparent()));
        assert_eq!(SerializableColor::parse(" Red "), Some(SerializableColor::new(255, 0, 0, 255)));
        assert_eq!(
            SerializableColor::parse("darkblue"),
            Some(SerializableColor::new(0, 0, 0x8b, 255))
        );
        assert_eq!(SerializableColor::parse("url(#grad)"), None);
    }

    #[test]
    fn test_parse_non_ascii_is_rejected() {
        assert_eq!(SerializableColor::parse("#é12"), None);
        assert_eq!(SerializableColor::parse("#ééé"), None);
        assert_eq!(SerializableColor::parse("rötlich"), None);
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(SerializableColor::new(255, 16, 0, 255).to_hex(), "#ff1000");
    }

    #[test]
    fn test_peniko_roundtrip() {
        let c = SerializableColor::new(12, 34, 56, 78);
        let back: SerializableColor = Color::from(c).into();
        assert_eq!(c, back);
    }
}
