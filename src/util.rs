//! Geometry helpers shared by the widget and its hosts.

// ============================================================================
// Allocation
// ============================================================================

/// Pixel region a host has assigned to a widget for the current paint cycle.
///
/// The origin is always the widget's own top-left corner, so only the extent is
/// stored. Zero-sized allocations are valid (collapsed or not yet laid out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Allocation {
    pub width: i32,
    pub height: i32,
}

impl Allocation {
    /// Creates an allocation, clamping negative extents to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Returns true if the allocation covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rectangle covering the whole allocation as `(x, y, width, height)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (0.0, 0.0, self.width as f64, self.height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extents_clamp_to_zero() {
        let alloc = Allocation::new(-4, 10);
        assert_eq!(alloc, Allocation::new(0, 10));
        assert!(alloc.is_empty());
    }

    #[test]
    fn bounds_start_at_origin() {
        assert_eq!(Allocation::new(800, 600).bounds(), (0.0, 0.0, 800.0, 600.0));
        assert!(!Allocation::new(1, 1).is_empty());
    }
}
