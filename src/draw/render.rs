//! Cairo-based rendering for solid color swatches.

use super::color::ColorRgb;
use crate::util::Allocation;

/// Fills the whole allocation with an opaque color.
///
/// The context state is saved before and restored after, so the caller's
/// source, path and operator are left untouched. Out-of-range components are
/// passed to Cairo as-is.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `color` - Fill color
/// * `allocation` - Region to cover, anchored at (0, 0)
pub fn fill_allocation(ctx: &cairo::Context, color: ColorRgb, allocation: Allocation) {
    let (x, y, width, height) = allocation.bounds();

    let _ = ctx.save();
    ctx.set_source_rgb(color.r, color.g, color.b);
    ctx.rectangle(x, y, width, height);
    let _ = ctx.fill(); // Ignore errors - a failed fill leaves the previous frame visible
    let _ = ctx.restore();
}

/// Clears a surface to fully transparent black.
///
/// Used by hosts before handing a fresh surface to a widget.
pub fn clear(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
