//! Offscreen Cairo host backed by an in-memory image surface.

use super::{HostError, WidgetHost};
use crate::draw::render;
use crate::util::Allocation;
use crate::widget::{Paintable, Propagation};
use cairo::{Context, Format, ImageSurface};
use log::{debug, trace};
use std::fs::File;
use std::path::Path;

/// A frame handed out by [`OffscreenHost::begin_frame`].
///
/// Holds its own Cairo context; finish it with [`OffscreenHost::end_frame`]
/// so the surface is flushed and released.
pub struct Frame {
    ctx: Context,
    allocation: Allocation,
}

impl Frame {
    /// Drawing context for this frame, already cleared.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Allocation the frame was produced for.
    pub fn allocation(&self) -> Allocation {
        self.allocation
    }
}

/// Single-threaded host that paints into an ARGB32 [`ImageSurface`].
///
/// Redraw requests are coalesced: any number of `queue_draw` calls between two
/// dispatches produce one frame. Requests made while hidden are dropped.
pub struct OffscreenHost {
    surface: ImageSurface,
    allocation: Allocation,
    visible: bool,
    frame_pending: bool,
    redraw_requests: u64,
    frames_painted: u64,
}

impl OffscreenHost {
    /// Creates a visible host with the given allocation and an initial frame pending.
    pub fn new(width: i32, height: i32) -> Result<Self, HostError> {
        let allocation = Allocation::new(width, height);
        let surface = ImageSurface::create(Format::ARgb32, allocation.width, allocation.height)?;
        debug!(
            "Created offscreen host {}x{}",
            allocation.width, allocation.height
        );
        Ok(Self {
            surface,
            allocation,
            visible: true,
            frame_pending: true,
            redraw_requests: 0,
            frames_painted: 0,
        })
    }

    /// Assigns a new allocation, reallocating the backing surface when the size changes.
    pub fn size_allocate(&mut self, width: i32, height: i32) -> Result<(), HostError> {
        let allocation = Allocation::new(width, height);
        if allocation != self.allocation {
            self.surface =
                ImageSurface::create(Format::ARgb32, allocation.width, allocation.height)?;
            self.allocation = allocation;
            debug!("Reallocated surface to {}x{}", width, height);
        }
        if self.visible {
            self.frame_pending = true;
        }
        Ok(())
    }

    /// Returns true when a frame will be produced by the next dispatch.
    pub fn has_pending_frame(&self) -> bool {
        self.visible && self.frame_pending
    }

    /// Number of `queue_draw` calls received so far.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Number of frames actually painted.
    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    /// Starts a frame if one is pending; returns `None` otherwise.
    pub fn begin_frame(&mut self) -> Result<Option<Frame>, HostError> {
        if !self.has_pending_frame() {
            return Ok(None);
        }
        self.frame_pending = false;

        let ctx = Context::new(&self.surface)?;
        render::clear(&ctx);
        Ok(Some(Frame {
            ctx,
            allocation: self.allocation,
        }))
    }

    /// Finishes a frame started with [`begin_frame`](Self::begin_frame).
    pub fn end_frame(&mut self, frame: Frame) {
        drop(frame);
        self.surface.flush();
        self.frames_painted += 1;
        trace!("Presented frame {}", self.frames_painted);
    }

    /// Runs one paint cycle for an external painter.
    ///
    /// Returns `Ok(true)` if a frame was painted.
    pub fn dispatch(&mut self, painter: &dyn Paintable) -> Result<bool, HostError> {
        let Some(frame) = self.begin_frame()? else {
            return Ok(false);
        };
        if painter.paint(frame.context(), frame.allocation()) == Propagation::Proceed {
            trace!("Painter left the frame for default handling");
        }
        self.end_frame(frame);
        Ok(true)
    }

    /// Reads the pixel at `(x, y)` as un-premultiplied `[r, g, b, a]`.
    ///
    /// Returns `None` outside the allocation or while a frame is still open.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.allocation.width || y >= self.allocation.height {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);

        let a = (argb >> 24) as u8;
        let unpremultiply = |c: u32| -> u8 {
            let c = c & 0xff;
            if a == 0 {
                0
            } else {
                ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
            }
        };
        Some([
            unpremultiply(argb >> 16),
            unpremultiply(argb >> 8),
            unpremultiply(argb),
            a,
        ])
    }

    /// Writes the current surface contents to a PNG file.
    ///
    /// Fails without touching `path` when the allocation has no pixels.
    pub fn write_png(&self, path: &Path) -> Result<(), HostError> {
        if self.allocation.is_empty() {
            return Err(HostError::EmptySurface {
                width: self.allocation.width,
                height: self.allocation.height,
            });
        }
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

impl WidgetHost for OffscreenHost {
    fn allocation(&self) -> Allocation {
        self.allocation
    }

    fn queue_draw(&mut self) {
        self.redraw_requests += 1;
        if self.visible {
            self.frame_pending = true;
        } else {
            trace!("Dropping redraw request while hidden");
        }
    }

    fn hide(&mut self) {
        self.visible = false;
        self.frame_pending = false;
    }

    fn show(&mut self) {
        self.visible = true;
        self.frame_pending = true;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ColorRgb, fill_allocation};

    struct Solid(ColorRgb);

    impl Paintable for Solid {
        fn paint(&self, ctx: &Context, allocation: Allocation) -> Propagation {
            fill_allocation(ctx, self.0, allocation);
            Propagation::Stop
        }
    }

    #[test]
    fn new_host_has_one_pending_frame() {
        let mut host = OffscreenHost::new(4, 4).unwrap();
        let painter = Solid(ColorRgb::new(0.0, 0.0, 1.0));
        assert!(host.dispatch(&painter).unwrap());
        assert!(!host.dispatch(&painter).unwrap());
        assert_eq!(host.frames_painted(), 1);
        assert_eq!(host.pixel(3, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn queued_draws_coalesce_into_one_frame() {
        let mut host = OffscreenHost::new(2, 2).unwrap();
        let painter = Solid(ColorRgb::new(1.0, 0.0, 0.0));
        host.dispatch(&painter).unwrap();

        host.queue_draw();
        host.queue_draw();
        assert_eq!(host.redraw_requests(), 2);
        assert!(host.dispatch(&painter).unwrap());
        assert!(!host.dispatch(&painter).unwrap());
        assert_eq!(host.frames_painted(), 2);
    }

    #[test]
    fn hidden_host_drops_redraws_until_shown() {
        let mut host = OffscreenHost::new(2, 2).unwrap();
        let painter = Solid(ColorRgb::new(0.0, 1.0, 0.0));
        host.hide();
        host.queue_draw();
        assert!(!host.has_pending_frame());
        assert!(!host.dispatch(&painter).unwrap());

        host.show();
        assert!(host.is_visible());
        assert!(host.dispatch(&painter).unwrap());
        assert_eq!(host.pixel(0, 1), Some([0, 255, 0, 255]));
    }

    #[test]
    fn size_allocate_resizes_surface_and_schedules_frame() {
        let mut host = OffscreenHost::new(2, 2).unwrap();
        let painter = Solid(ColorRgb::new(1.0, 1.0, 1.0));
        host.dispatch(&painter).unwrap();

        host.size_allocate(8, 3).unwrap();
        assert_eq!(host.allocation(), Allocation::new(8, 3));
        assert!(host.dispatch(&painter).unwrap());
        assert_eq!(host.pixel(7, 2), Some([255, 255, 255, 255]));
        assert_eq!(host.pixel(8, 2), None);
    }

    #[test]
    fn zero_sized_host_paints_without_pixels() {
        let mut host = OffscreenHost::new(0, 0).unwrap();
        let painter = Solid(ColorRgb::new(1.0, 0.0, 0.0));
        assert!(host.dispatch(&painter).unwrap());
        assert_eq!(host.pixel(0, 0), None);
    }

    #[test]
    fn empty_surface_is_not_written() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("empty.png");
        let mut host = OffscreenHost::new(0, 5).unwrap();
        host.dispatch(&Solid(ColorRgb::new(1.0, 0.0, 0.0))).unwrap();

        let err = host.write_png(&path).unwrap_err();
        assert!(matches!(
            err,
            HostError::EmptySurface {
                width: 0,
                height: 5
            }
        ));
        assert!(!path.exists());
    }

    struct Backdrop;

    impl Paintable for Backdrop {
        fn paint(&self, _ctx: &Context, _allocation: Allocation) -> Propagation {
            Propagation::Proceed
        }
    }

    #[test]
    fn unhandled_paint_still_presents_a_cleared_frame() {
        let mut host = OffscreenHost::new(2, 2).unwrap();
        assert!(host.dispatch(&Backdrop).unwrap());
        assert_eq!(host.frames_painted(), 1);
        assert_eq!(host.pixel(1, 1), Some([0, 0, 0, 0]));
    }
}
