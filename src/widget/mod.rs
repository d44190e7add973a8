//! The color sample widget.
//!
//! [`SampleWidget`] holds one opaque RGB color and paints it over its entire
//! allocation. It does not draw by itself: changes are forwarded to the
//! [`WidgetHost`] that owns it, which later calls [`Paintable::paint`].
//!
//! There are two ways to change the color, and they refresh differently:
//! - [`SampleWidget::set_color`] asks the host for one incremental redraw.
//! - The property path ([`SampleWidget::set_color_property`] and the by-name
//!   [`SampleWidget::set_property`]) unmaps and remaps the widget, which forces
//!   a full repaint and may flicker on real displays.

pub mod property;

pub use property::{Property, PropertyValue};

use crate::draw::{ColorRgb, WHITE, fill_allocation};
use crate::host::{HostError, OffscreenHost, WidgetHost};
use crate::util::Allocation;
use log::trace;

/// Answer returned by a paint handler to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The handler covered the frame; no default painting should follow.
    Stop,
    /// The host may continue with its default painting.
    Proceed,
}

/// Something that can draw itself into a host-provided Cairo context.
pub trait Paintable {
    /// Paints the widget. `allocation` is the region assigned for this cycle,
    /// anchored at the context origin.
    fn paint(&self, ctx: &cairo::Context, allocation: Allocation) -> Propagation;
}

/// A widget that previews a single color as a filled rectangle.
pub struct SampleWidget<H: WidgetHost> {
    color: ColorRgb,
    host: H,
}

impl<H: WidgetHost> SampleWidget<H> {
    /// Creates a widget attached to `host`, initially white.
    pub fn new(host: H) -> Self {
        Self { color: WHITE, host }
    }

    /// Returns a copy of the current color.
    pub fn color(&self) -> ColorRgb {
        self.color
    }

    /// Replaces the color and requests exactly one redraw.
    ///
    /// Components are not validated or clamped.
    pub fn set_color(&mut self, color: ColorRgb) {
        self.color = color;
        trace!("Sample color set to {}", color);
        self.host.queue_draw();
    }

    /// Replaces the color through the property path.
    ///
    /// Ends with a hide/show cycle on the host rather than a queued redraw.
    pub fn set_color_property(&mut self, color: ColorRgb) {
        self.color = color;
        trace!("Sample color property set to {}", color);
        self.remap();
    }

    /// The host this widget is attached to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to change the allocation.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detaches the widget, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn remap(&mut self) {
        self.host.hide();
        self.host.show();
    }
}

impl<H: WidgetHost> Paintable for SampleWidget<H> {
    fn paint(&self, ctx: &cairo::Context, allocation: Allocation) -> Propagation {
        fill_allocation(ctx, self.color, allocation);
        Propagation::Stop
    }
}

impl SampleWidget<OffscreenHost> {
    /// Creates a white widget on a fresh offscreen host of the given size.
    pub fn offscreen(width: i32, height: i32) -> Result<Self, HostError> {
        Ok(Self::new(OffscreenHost::new(width, height)?))
    }

    /// Paints a pending frame, if any. Returns `Ok(true)` when a frame was painted.
    pub fn dispatch(&mut self) -> Result<bool, HostError> {
        let Some(frame) = self.host.begin_frame()? else {
            return Ok(false);
        };
        self.paint(frame.context(), frame.allocation());
        self.host.end_frame(frame);
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::draw::{BLUE, GRAY, RED};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum HostEvent {
        QueueDraw,
        Hide,
        Show,
    }

    /// Host that records every request instead of painting.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub(crate) allocation: Allocation,
        pub(crate) visible: bool,
        pub(crate) events: Vec<HostEvent>,
    }

    impl WidgetHost for RecordingHost {
        fn allocation(&self) -> Allocation {
            self.allocation
        }

        fn queue_draw(&mut self) {
            self.events.push(HostEvent::QueueDraw);
        }

        fn hide(&mut self) {
            self.visible = false;
            self.events.push(HostEvent::Hide);
        }

        fn show(&mut self) {
            self.visible = true;
            self.events.push(HostEvent::Show);
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    #[test]
    fn new_widget_is_white() {
        let widget = SampleWidget::new(RecordingHost::default());
        assert_eq!(widget.color(), ColorRgb::new(1.0, 1.0, 1.0));
        assert!(widget.host().events.is_empty());
    }

    #[test]
    fn set_color_round_trips_and_queues_one_redraw_per_call() {
        let mut widget = SampleWidget::new(RecordingHost::default());
        for (i, color) in [RED, GRAY, ColorRgb::new(0.0, 0.25, 1.0)]
            .into_iter()
            .enumerate()
        {
            widget.set_color(color);
            assert_eq!(widget.color(), color);
            assert_eq!(widget.host().events.len(), i + 1);
        }
        assert!(
            widget
                .host()
                .events
                .iter()
                .all(|e| *e == HostEvent::QueueDraw)
        );
    }

    #[test]
    fn set_color_passes_out_of_range_values_through() {
        let mut widget = SampleWidget::new(RecordingHost::default());
        let wild = ColorRgb::new(1.5, -0.2, 3.0);
        widget.set_color(wild);
        assert_eq!(widget.color(), wild);
    }

    #[test]
    fn property_setter_remaps_instead_of_queueing() {
        let mut widget = SampleWidget::new(RecordingHost::default());
        widget.set_color_property(BLUE);
        assert_eq!(widget.color(), BLUE);
        assert_eq!(
            widget.host().events,
            vec![HostEvent::Hide, HostEvent::Show]
        );
        assert!(widget.host().is_visible());
    }

    #[test]
    fn both_paths_reach_the_same_color() {
        let target = ColorRgb::new(0.2, 0.4, 0.6);
        let mut direct = SampleWidget::new(RecordingHost::default());
        let mut via_property = SampleWidget::new(RecordingHost::default());
        direct.set_color(target);
        via_property.set_color_property(target);
        assert_eq!(direct.color(), via_property.color());
    }

    #[test]
    fn paint_reports_handled_and_keeps_color() {
        let widget = SampleWidget::new(RecordingHost::default());
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 3, 3).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        assert_eq!(
            widget.paint(&ctx, Allocation::new(3, 3)),
            Propagation::Stop
        );
        assert_eq!(widget.color(), WHITE);
    }

    #[test]
    fn offscreen_dispatch_repaints_after_each_path() {
        let mut widget = SampleWidget::offscreen(5, 5).unwrap();
        assert!(widget.dispatch().unwrap());
        assert_eq!(widget.host_mut().pixel(2, 2), Some([255, 255, 255, 255]));

        widget.set_color(RED);
        assert!(widget.dispatch().unwrap());
        assert_eq!(widget.host_mut().pixel(4, 0), Some([255, 0, 0, 255]));

        widget.set_color_property(BLUE);
        assert!(widget.dispatch().unwrap());
        assert_eq!(widget.host_mut().pixel(0, 4), Some([0, 0, 255, 255]));
        assert_eq!(widget.host().frames_painted(), 3);
        assert_eq!(widget.host().redraw_requests(), 1);
    }
}
