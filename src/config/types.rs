//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Swatch appearance settings.
///
/// Provides the starting color and allocation used when nothing is given on
/// the command line.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SwatchConfig {
    /// Initial color - a named color, `#rrggbb`, `r, g, b` floats,
    /// or an RGB array like `[255, 128, 0]`
    #[serde(default)]
    pub default_color: ColorSpec,

    /// Allocation width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Allocation height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            default_color: ColorSpec::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> i32 {
    120
}

fn default_height() -> i32 {
    80
}
