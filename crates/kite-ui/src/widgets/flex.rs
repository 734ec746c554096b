use kite_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Axis / Align ──────────────────────────────────────────────────────────

/// Main axis of a [`Flex`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children stacked top to bottom (a column).
    Vertical,
    /// Children placed left to right (a row).
    Horizontal,
}

impl Axis {
    #[inline]
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Vertical => v.y,
            Axis::Horizontal => v.x,
        }
    }

    #[inline]
    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Vertical => v.x,
            Axis::Horizontal => v.y,
        }
    }

    /// Builds a vector from main/cross components.
    #[inline]
    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Vertical => Vec2::new(cross, main),
            Axis::Horizontal => Vec2::new(main, cross),
        }
    }
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the cross axis when it is bounded.
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

// ── Flex ──────────────────────────────────────────────────────────────────

/// Linear container: a column ([`Flex::column`]) or a row ([`Flex::row`]).
///
/// Children get their natural main-axis size, separated by `gap`.
///
/// ```rust,ignore
/// Flex::row()
///     .gap(8.0)
///     .align(Align::Center)
///     .child(Polygon::new(Diamond::new()).size(100.0, 50.0))
///     .child(Polygon::new(Triangle::new()).size(100.0, 50.0))
/// ```
pub struct Flex {
    axis: Axis,
    children: Vec<Element>,
    gap: f32,
    padding: Edges,
    align: Align,
}

impl Flex {
    pub fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new(), gap: 0.0, padding: Edges::default(), align: Align::Stretch }
    }

    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn gap(mut self, v: f32) -> Self {
        self.gap = v.max(0.0);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(self, v: f32) -> Self {
        self.padding(Edges::all(v))
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // ── layout helpers ────────────────────────────────────────────────────

    /// Main axis unbounded; cross axis bounded by `inner_cross` (and forced
    /// to it under `Stretch`, unless unbounded).
    fn child_constraints(&self, inner_cross: f32) -> Constraints {
        let min_cross = match self.align {
            Align::Stretch if inner_cross.is_finite() => inner_cross,
            _ => 0.0,
        };
        Constraints {
            min: self.axis.pack(0.0, min_cross),
            max: self.axis.pack(f32::INFINITY, inner_cross),
        }
    }

    fn total_gaps(&self) -> f32 {
        self.gap * self.children.len().saturating_sub(1) as f32
    }

    fn cross_offset(&self, inner_cross: f32, child_cross: f32) -> f32 {
        match self.align {
            Align::Stretch | Align::Start => 0.0,
            Align::Center => (inner_cross - child_cross) * 0.5,
            Align::End => inner_cross - child_cross,
        }
    }
}

impl Widget for Flex {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let axis = self.axis;
        let inner = constraints.shrink(self.padding);
        let inner_cross = axis.cross(inner.max);
        let child_c = self.child_constraints(inner_cross);

        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        for child in &self.children {
            let s = child.measure(child_c);
            main += axis.main(s);
            cross = cross.max(axis.cross(s));
        }
        main += self.total_gaps();

        if self.align == Align::Stretch && inner_cross.is_finite() {
            cross = inner_cross;
        }

        let pad = Vec2::new(self.padding.h(), self.padding.v());
        constraints.constrain(axis.pack(main, cross) + pad)
    }

    fn paint(&mut self, painter: &mut Painter<'_>, rect: Rect) {
        let axis = self.axis;
        let inner = inset_rect(rect, self.padding);
        let inner_cross = axis.cross(inner.size);
        let child_c = self.child_constraints(inner_cross);
        let gap = self.gap;

        let mut cursor = axis.main(inner.origin);
        for i in 0..self.children.len() {
            let s = self.children[i].measure(child_c);
            let cross_pos = axis.cross(inner.origin) + self.cross_offset(inner_cross, axis.cross(s));
            let origin = axis.pack(cursor, cross_pos);
            self.children[i].paint(painter, Rect::from_size(s).translated(origin));
            cursor += axis.main(s) + gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::paint_once;
    use crate::widgets::diamond::Diamond;
    use crate::widgets::polygon::Polygon;
    use crate::widgets::triangle::Triangle;

    fn pair(flex: Flex) -> Flex {
        flex.child(Polygon::new(Diamond::new()).size(100.0, 50.0))
            .child(Polygon::new(Triangle::new()).size(40.0, 20.0))
    }

    #[test]
    fn row_measures_sum_and_max() {
        let row = pair(Flex::row().gap(10.0).align(Align::Start));
        assert_eq!(row.measure(Constraints::unbounded()), Vec2::new(150.0, 50.0));
    }

    #[test]
    fn column_with_padding() {
        let col = pair(Flex::column().padding_all(5.0).align(Align::Start));
        assert_eq!(col.measure(Constraints::unbounded()), Vec2::new(110.0, 80.0));
    }

    #[test]
    fn stretch_fills_bounded_cross_axis() {
        let col = pair(Flex::column());
        let s = col.measure(Constraints::loose(Vec2::new(300.0, 1000.0)));
        assert_eq!(s, Vec2::new(300.0, 70.0));
    }

    #[test]
    fn row_places_children_left_to_right() {
        let mut row = pair(Flex::row().gap(10.0).align(Align::End));
        let list = paint_once(&mut row, Rect::new(0.0, 0.0, 400.0, 50.0));
        let v = list.mesh().vertices();
        // Diamond left corner at (0, 25); triangle bottom-left at (110, 50).
        assert_eq!(v[0].xy(), Vec2::new(0.0, 25.0));
        assert_eq!(v[4].xy(), Vec2::new(110.0, 50.0));
        // End alignment pushes the shorter triangle down: its apex is at y = 30.
        assert_eq!(v[5].xy(), Vec2::new(130.0, 30.0));
    }

    #[test]
    fn centered_column() {
        let mut col = pair(Flex::column().align(Align::Center));
        let list = paint_once(&mut col, Rect::new(0.0, 0.0, 200.0, 100.0));
        let v = list.mesh().vertices();
        assert_eq!(v[1].xy(), Vec2::new(100.0, 0.0)); // diamond top
        assert_eq!(v[5].xy(), Vec2::new(100.0, 50.0)); // triangle apex
    }

    #[test]
    fn empty_flex_is_padding_only() {
        let f = Flex::row().padding_all(3.0).align(Align::Start);
        assert!(f.is_empty());
        assert_eq!(f.measure(Constraints::unbounded()), Vec2::new(6.0, 6.0));
    }
}
