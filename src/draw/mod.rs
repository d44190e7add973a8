//! Rendering primitives (Cairo-based).
//!
//! - [`ColorRgb`]: opaque RGB color with predefined constants and parsing
//! - [`fill_allocation`]: paints a color over a widget's full allocation

pub mod color;
pub mod render;

pub use color::{ColorParseError, ColorRgb};
pub use render::{clear, fill_allocation};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GRAY, GREEN, RED, WHITE};
