use kite_engine::coords::{Rect, Vec2};
use kite_engine::mesh::MeshWriteData;
use kite_engine::paint::Color;
use kite_engine::scene::{DrawList, ZIndex};

// ── VisualContent ─────────────────────────────────────────────────────────

/// Capability of producing a tinted mesh for a content rectangle.
///
/// The host calls this once per repaint. Implementors read the rect from
/// [`MeshGenerationContext::content_rect`] and submit every vertex and index
/// they allocate before returning.
pub trait VisualContent {
    fn generate_visual_content(&mut self, mgc: &mut MeshGenerationContext<'_, '_>);
}

// ── MeshGenerationContext ─────────────────────────────────────────────────

/// Mesh-write surface handed to [`VisualContent`] for one widget.
pub struct MeshGenerationContext<'p, 'a> {
    painter: &'p mut Painter<'a>,
    rect: Rect,
}

impl MeshGenerationContext<'_, '_> {
    /// The widget's content rect in local space: origin `(0, 0)`, size
    /// `(width, height)`. Submitted vertices are placed on screen relative
    /// to the widget's layout origin.
    #[inline]
    pub fn content_rect(&self) -> Rect {
        self.rect.local()
    }

    /// Reserves `vertex_count` vertices and `index_count` indices.
    ///
    /// # Panics
    /// When the request is invalid (index count not a multiple of 3, or
    /// more vertices than a `u16` index addresses), and when the returned
    /// view is dropped before every slot was written.
    pub fn allocate(&mut self, vertex_count: usize, index_count: usize) -> MeshWriteData<'_> {
        let z = self.painter.next_z();
        self.painter
            .draw_list
            .allocate_mesh(z, self.rect.origin, vertex_count, index_count)
    }
}

// ── Painter ───────────────────────────────────────────────────────────────

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the frame's `DrawList`; every draw call gets the next z so paint
/// order equals call order.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Runs `content`'s mesh generation for a widget laid out at `rect`.
    ///
    /// Layout results that are not finite or have negative extents are
    /// clamped to zero, so content always sees a well-formed rect.
    pub fn generate_visual_content(&mut self, rect: Rect, content: &mut dyn VisualContent) {
        let origin = if rect.origin.is_finite() { rect.origin } else { Vec2::zero() };
        let sane = Rect::from_size(rect.size.sanitized()).translated(origin);
        if sane != rect {
            log::warn!("clamped ill-formed content rect {rect:?} to {sane:?}");
        }

        let before = self.draw_list.mesh().vertices().len();
        let mut mgc = MeshGenerationContext { painter: self, rect: sane };
        content.generate_visual_content(&mut mgc);
        log::trace!(
            "visual content at {:?}: {} vertices",
            sane.origin,
            self.draw_list.mesh().vertices().len() - before
        );
    }

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_engine::mesh::Vertex;
    use kite_engine::scene::DrawCmd;

    /// One triangle spanning the content rect's top edge to its bottom-left.
    struct Wedge;

    impl VisualContent for Wedge {
        fn generate_visual_content(&mut self, mgc: &mut MeshGenerationContext<'_, '_>) {
            let r = mgc.content_rect();
            let mut mwd = mgc.allocate(3, 3);
            mwd.set_all_vertices(&[
                Vertex::new(Vec2::zero(), Color::WHITE),
                Vertex::new(Vec2::new(r.width(), 0.0), Color::WHITE),
                Vertex::new(Vec2::new(0.0, r.height()), Color::WHITE),
            ]);
            mwd.set_all_indices(&[0, 1, 2]);
        }
    }

    #[test]
    fn content_rect_is_local_and_output_is_placed() {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            painter.generate_visual_content(Rect::new(20.0, 30.0, 10.0, 5.0), &mut Wedge);
        }
        let xy: Vec<Vec2> = list.mesh().vertices().iter().map(|v| v.xy()).collect();
        assert_eq!(xy, vec![Vec2::new(20.0, 30.0), Vec2::new(30.0, 30.0), Vec2::new(20.0, 35.0)]);
    }

    #[test]
    fn each_draw_call_gets_a_higher_z() {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            painter.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK);
            painter.generate_visual_content(Rect::new(0.0, 0.0, 5.0, 5.0), &mut Wedge);
        }
        let zs: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);
        assert!(matches!(list.items()[1].cmd, DrawCmd::Mesh(_)));
    }

    #[test]
    fn non_finite_rect_is_clamped() {
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list);
            painter.generate_visual_content(Rect::new(0.0, 0.0, f32::NAN, -4.0), &mut Wedge);
        }
        assert!(list.mesh().vertices().iter().all(|v| v.xy() == Vec2::zero()));
    }
}
