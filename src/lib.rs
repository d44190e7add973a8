//! Solid color sample widget.
//!
//! [`SampleWidget`] previews one RGB color by filling its whole allocation.
//! Hosts implement [`host::WidgetHost`]; [`host::OffscreenHost`] is a Cairo
//! image-surface host used by the `swatch` binary and the tests.

pub mod config;
pub mod draw;
pub mod host;
pub mod util;
pub mod widget;

pub use config::Config;
pub use draw::ColorRgb;
pub use widget::{Paintable, Propagation, SampleWidget};
