use kite_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::{Painter, VisualContent};
use crate::widget::Widget;

/// Extent used for an unset dimension when the parent leaves that axis unbounded.
pub const DEFAULT_EXTENT: f32 = 64.0;

/// Leaf widget hosting a [`VisualContent`] shape.
///
/// Unset dimensions fill the space the parent offers (or fall back to
/// [`DEFAULT_EXTENT`] on an unbounded axis). The shape is repainted with the
/// final rect every frame.
///
/// ```rust,ignore
/// Polygon::new(Diamond::new()).size(100.0, 50.0)
/// ```
pub struct Polygon<S> {
    shape: S,
    width: Option<f32>,
    height: Option<f32>,
}

impl<S: VisualContent> Polygon<S> {
    pub fn new(shape: S) -> Self {
        Self { shape, width: None, height: None }
    }

    pub fn width(mut self, v: f32) -> Self {
        self.width = Some(v.max(0.0));
        self
    }

    pub fn height(mut self, v: f32) -> Self {
        self.height = Some(v.max(0.0));
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }
}

impl<S: VisualContent + 'static> Widget for Polygon<S> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let fill = |max: f32| if max.is_finite() { max } else { DEFAULT_EXTENT };
        constraints.constrain(Vec2::new(
            self.width.unwrap_or_else(|| fill(constraints.max.x)),
            self.height.unwrap_or_else(|| fill(constraints.max.y)),
        ))
    }

    fn paint(&mut self, painter: &mut Painter<'_>, rect: Rect) {
        painter.generate_visual_content(rect, &mut self.shape);
    }
}
