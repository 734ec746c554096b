use kite_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Layout calls [`measure`](Self::measure) (possibly several times), then
/// the host calls [`paint`](Self::paint) once per frame with the rect the
/// parent allocated. `paint` takes `&mut self` so widgets can rewrite
/// buffers they own in place instead of reallocating every frame.
pub trait Widget: 'static {
    /// Size this widget wants within `constraints`. Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw into `painter` inside `rect`. Containers paint their children
    /// by calling `paint` on them with the child rects.
    fn paint(&mut self, painter: &mut Painter<'_>, rect: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for containers.
///
/// Any `Widget` converts via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&mut self, painter: &mut Painter<'_>, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
