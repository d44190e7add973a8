//! Host side of the widget boundary.
//!
//! A host owns layout and redraw scheduling. Widgets never paint on their own;
//! they ask the host for a frame (`queue_draw`) or toggle their mapping
//! (`hide`/`show`), and the host calls back into [`Paintable::paint`] when a
//! frame is due.
//!
//! [`Paintable::paint`]: crate::widget::Paintable::paint

pub mod offscreen;

pub use offscreen::{Frame, OffscreenHost};

use crate::util::Allocation;
use thiserror::Error;

/// Operations a widget may request from whatever hosts it.
///
/// All calls happen on the host's single UI thread.
pub trait WidgetHost {
    /// Region currently assigned to the widget.
    fn allocation(&self) -> Allocation;

    /// Schedules a repaint of the whole allocation on the next cycle.
    fn queue_draw(&mut self);

    /// Unmaps the widget. Pending frames are discarded.
    fn hide(&mut self);

    /// Maps the widget and schedules a full repaint.
    fn show(&mut self);

    /// Whether the widget is currently mapped.
    fn is_visible(&self) -> bool;
}

/// Errors raised by hosts that own real drawing surfaces.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Cannot encode a {width}x{height} surface as PNG")]
    EmptySurface { width: i32, height: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
