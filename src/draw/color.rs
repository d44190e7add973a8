//! RGB color type, predefined colors and text parsing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an opaque RGB color with floating-point components.
///
/// Components are normally in the range 0.0 (minimum) to 1.0 (maximum). Values
/// outside that range are stored unchanged; Cairo clamps them when painting.
///
/// # Examples
///
/// ```
/// use swatch::draw::ColorRgb;
/// let orange = ColorRgb::new(1.0, 0.5, 0.0);
/// assert_eq!(orange.to_hex(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRgb {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
}

impl ColorRgb {
    /// Creates a new color from RGB components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels (0-255).
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Converts to 8-bit channels, clamping each component to 0.0-1.0 first.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Looks up a predefined color by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "gray" | "grey" => Some(GRAY),
            _ => None,
        }
    }

    fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    fn from_components(text: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ComponentCount(parts.len()));
        }
        let mut channels = [0.0; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ColorParseError::InvalidComponent(part.to_string()))?;
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }
}

impl Default for ColorRgb {
    fn default() -> Self {
        WHITE
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

/// Errors produced when parsing a color from text.
#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),

    #[error("expected 3 comma-separated components, found {0}")]
    ComponentCount(usize),

    #[error("invalid color component '{0}'")]
    InvalidComponent(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl FromStr for ColorRgb {
    type Err = ColorParseError;

    /// Parses a named color, `#rrggbb` / `rrggbb` hex, or `r,g,b` floats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = text.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        if text.contains(',') {
            return Self::from_components(text);
        }
        if let Some(color) = Self::from_name(text) {
            return Ok(color);
        }
        if text.len() == 6 && text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(text);
        }
        Err(ColorParseError::UnknownName(text.to_string()))
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined white color (R=1.0, G=1.0, B=1.0), the widget default
pub const WHITE: ColorRgb = ColorRgb::new(1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: ColorRgb = ColorRgb::new(0.0, 0.0, 0.0);

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: ColorRgb = ColorRgb::new(1.0, 0.0, 0.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: ColorRgb = ColorRgb::new(0.0, 1.0, 0.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: ColorRgb = ColorRgb::new(0.0, 0.0, 1.0);

/// Predefined mid gray (R=G=B=0.5)
pub const GRAY: ColorRgb = ColorRgb::new(0.5, 0.5, 0.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("White".parse::<ColorRgb>().unwrap(), WHITE);
        assert_eq!(" grey ".parse::<ColorRgb>().unwrap(), GRAY);
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(
            "#ff8000".parse::<ColorRgb>().unwrap(),
            ColorRgb::from_rgb8(255, 128, 0)
        );
        assert_eq!("0000ff".parse::<ColorRgb>().unwrap(), BLUE);
        assert_eq!(
            "#ff80".parse::<ColorRgb>(),
            Err(ColorParseError::InvalidHex("ff80".into()))
        );
    }

    #[test]
    fn parses_float_components_without_clamping() {
        let color: ColorRgb = "0.25, 1.5, -0.1".parse().unwrap();
        assert_eq!(color, ColorRgb::new(0.25, 1.5, -0.1));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<ColorRgb>(), Err(ColorParseError::Empty));
        assert_eq!(
            "0.1,0.2".parse::<ColorRgb>(),
            Err(ColorParseError::ComponentCount(2))
        );
        assert_eq!(
            "0.1,x,0.2".parse::<ColorRgb>(),
            Err(ColorParseError::InvalidComponent("x".into()))
        );
        assert_eq!(
            "chartreuse".parse::<ColorRgb>(),
            Err(ColorParseError::UnknownName("chartreuse".into()))
        );
    }

    #[test]
    fn hex_output_clamps_out_of_range_channels() {
        assert_eq!(ColorRgb::new(2.0, -1.0, 0.5).to_hex(), "#ff0080");
        assert_eq!(ColorRgb::default(), WHITE);
    }
}
