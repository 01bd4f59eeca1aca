/// Logical size (width, height).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Degenerate zero size, reported for stores without frames.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        !self.is_empty() && self.width.is_finite() && self.height.is_finite()
    }

    /// Whole-pixel dimensions, rounded to nearest and at least 1x1.
    ///
    /// Returns `None` when the size is empty or not finite.
    #[inline]
    pub fn to_pixels(self) -> Option<(u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        let w = self.width.round().clamp(1.0, u32::MAX as f32) as u32;
        let h = self.height.round().clamp(1.0, u32::MAX as f32) as u32;
        Some((w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── validity ──────────────────────────────────────────────────────────

    #[test]
    fn zero_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(!Size::ZERO.is_valid());
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(!Size::new(f32::INFINITY, 4.0).is_valid());
        assert!(!Size::new(4.0, f32::NAN).is_valid());
    }

    // ── to_pixels ─────────────────────────────────────────────────────────

    #[test]
    fn to_pixels_rounds_to_nearest() {
        assert_eq!(Size::new(10.4, 20.6).to_pixels(), Some((10, 21)));
    }

    #[test]
    fn to_pixels_never_rounds_to_zero() {
        // A sub-pixel size is still a valid (non-empty) target.
        assert_eq!(Size::new(0.2, 0.3).to_pixels(), Some((1, 1)));
    }

    #[test]
    fn to_pixels_rejects_empty() {
        assert_eq!(Size::new(0.0, 10.0).to_pixels(), None);
        assert_eq!(Size::new(-3.0, 10.0).to_pixels(), None);
    }

    #[test]
    fn from_pixels_round_trips_dimensions() {
        assert_eq!(Size::from_pixels(32, 16), Size::new(32.0, 16.0));
    }
}
