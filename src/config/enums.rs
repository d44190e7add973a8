//! Configuration enum types.

use crate::draw::{ColorRgb, WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a textual color or 8-bit RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "white"
///
/// # Hex or float components
/// default_color = "#ff8000"
/// default_color = "1.0, 0.5, 0.0"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (white, black, red, green, blue, gray), `#rrggbb`, or `r, g, b`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Name("white".to_string())
    }
}

impl ColorSpec {
    /// Converts the color specification to a [`ColorRgb`].
    ///
    /// Text that does not parse falls back to white with a warning.
    pub fn to_color(&self) -> ColorRgb {
        match self {
            ColorSpec::Name(text) => text.parse().unwrap_or_else(|err| {
                warn!("Invalid color '{}' ({}), using white", text, err);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => ColorRgb::from_rgb8(*r, *g, *b),
        }
    }
}
