use kite_engine::coords::{Rect, Vec2};
use kite_engine::paint::Color;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding, a solid background, a
/// minimum size and optional clipping.
///
/// All properties are optional; an empty `Container` only takes up space.
///
/// # Example
/// ```rust,ignore
/// Container::new()
///     .padding_all(12.0)
///     .background(Color::rgb(17, 17, 24))
///     .clip(true)
///     .child(Polygon::new(Diamond::new()).size(100.0, 50.0))
/// ```
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
    min_width: f32,
    min_height: f32,
    clip: bool,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            min_width: 0.0,
            min_height: 0.0,
            clip: false,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = width.max(0.0);
        self.min_height = height.max(0.0);
        self
    }

    /// Clip the child's output to the container's rect.
    pub fn clip(mut self, on: bool) -> Self {
        self.clip = on;
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let inner = constraints.shrink(self.padding);

        let child_size = self
            .child
            .as_ref()
            .map(|c| c.measure(inner))
            .unwrap_or(Vec2::zero());

        let w = (child_size.x + self.padding.h()).max(self.min_width);
        let h = (child_size.y + self.padding.v()).max(self.min_height);
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&mut self, painter: &mut Painter<'_>, rect: Rect) {
        if let Some(bg) = self.background {
            painter.fill_rect(rect, bg);
        }

        let Some(child) = &mut self.child else {
            return;
        };

        let inner = inset_rect(rect, self.padding);
        let size = child.measure(Constraints::loose(inner.size));
        if self.clip {
            painter.push_clip(rect);
        }
        child.paint(painter, Rect::from_size(size).translated(inner.origin));
        if self.clip {
            painter.pop_clip();
        }
    }
}
