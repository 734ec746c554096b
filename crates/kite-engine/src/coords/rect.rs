use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Layout hands every widget one of these as its content rectangle. Widgets
/// that build geometry usually work in [`local`](Self::local) space, where the
/// origin is `(0, 0)` and the far corner is `(width, height)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` anchored at the origin.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { origin: Vec2::zero(), size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Same size, origin moved to `(0, 0)`.
    #[inline]
    pub fn local(self) -> Self {
        Self::from_size(self.size)
    }

    #[inline]
    pub fn translated(self, by: Vec2) -> Self {
        Self { origin: self.origin + by, size: self.size }
    }

    /// True when the rect covers no area. Zero-area rects are still valid
    /// layout results; widgets must accept them.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Overlap of two rects, or `None` when they share no area.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let far = self.max();
        let other_far = other.max();
        let x1 = far.x.min(other_far.x);
        let y1 = far.y.min(other_far.y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}
