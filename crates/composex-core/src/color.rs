//! Concrete colors
//!
//! A [`Color`] is the finalized form of a [`crate::theme::ColorType`]: straight
//! (non-premultiplied) RGBA with 8-bit channels and a fractional alpha.
//! Colors travel through configuration and exports as hex strings
//! (`#RRGGBB`, or `#RRGGBBAA` when translucent).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hex color parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Wrong number of hex digits
    #[error("Hex color must be 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    /// Non-hex character in the string
    #[error("Invalid hex digits in color: {0}")]
    InvalidDigit(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// Straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha in `0.0..=1.0`
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0.0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with an explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 {
            channel(6..8)? as f32 / 255.0
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }

    /// Replace the alpha channel, keeping RGB
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiply the alpha channel by `factor`, keeping RGB
    ///
    /// This is not a blend against any backdrop.
    pub fn multiply_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Whether the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.alpha_byte() == 0xFF
    }

    fn alpha_byte(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Uppercase hex form; the alpha pair is only emitted when translucent
    ///
    /// Alpha is quantized to one byte here, so `0.425` becomes `6C`
    /// (`108 / 255`). Use [`Color::to_css`] for the exact alpha.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r,
                self.g,
                self.b,
                self.alpha_byte()
            )
        }
    }

    /// CSS functional notation, e.g. `rgba(33, 150, 243, 0.85)`
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Average of the RGB channels (0-255), a rough lightness measure
    pub fn average_luminance(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse_hex("2196F3").unwrap(), Color::rgb(33, 150, 243));
        assert_eq!(Color::parse_hex("#4caf50").unwrap(), Color::rgb(76, 175, 80));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let color = Color::parse_hex("#FF000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            Color::parse_hex("#FFF"),
            Err(ColorParseError::InvalidLength(3))
        );
        assert!(matches!(
            Color::parse_hex("#GGGGGG"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_from_rgb_u32() {
        assert_eq!(Color::from_rgb_u32(0x1565C0), Color::rgb(0x15, 0x65, 0xC0));
    }

    // ==========================================================================
    // Alpha Tests
    // ==========================================================================

    #[test]
    fn test_multiply_alpha_keeps_rgb() {
        let base = Color::rgb(21, 101, 192);
        let faded = base.multiply_alpha(0.85);
        assert_eq!((faded.r, faded.g, faded.b), (21, 101, 192));
        assert!((faded.a - 0.85).abs() < 1e-6);

        let twice = faded.multiply_alpha(0.5);
        assert!((twice.a - 0.425).abs() < 1e-6);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(1.5).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-0.2).a, 0.0);
    }

    // ==========================================================================
    // Formatting Tests
    // ==========================================================================

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(157, 78, 221).to_hex(), "#9D4EDD");
        assert_eq!(Color::rgb(255, 0, 0).with_alpha(0.5).to_hex(), "#FF000080");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::rgb(33, 150, 243).to_css(), "rgb(33, 150, 243)");
        assert_eq!(
            Color::rgb(33, 150, 243).with_alpha(0.85).to_css(),
            "rgba(33, 150, 243, 0.85)"
        );
    }

    #[test]
    fn test_to_css_keeps_exact_alpha() {
        let pressed = Color::rgb(10, 20, 30).with_alpha(0.5).multiply_alpha(0.85);
        assert_eq!(pressed.to_css(), "rgba(10, 20, 30, 0.425)");
        assert_eq!(pressed.to_hex(), "#0A141E6C");
        assert_eq!(
            Color::rgb(33, 150, 243).with_alpha(0.9).to_css(),
            "rgba(33, 150, 243, 0.9)"
        );
    }

    #[test]
    fn test_average_luminance() {
        assert_eq!(Color::WHITE.average_luminance(), 255);
        assert_eq!(Color::BLACK.average_luminance(), 0);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(244, 67, 54)).unwrap();
        assert_eq!(json, "\"#F44336\"");

        let parsed: Color = serde_json::from_str("\"#F57C00\"").unwrap();
        assert_eq!(parsed, Color::rgb(245, 124, 0));

        assert!(serde_json::from_str::<Color>("\"not-a-color\"").is_err());
    }
}
