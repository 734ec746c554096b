use kite_engine::coords::Vec2;
use kite_engine::mesh::Vertex;
use kite_engine::paint::Color;

use crate::painter::{MeshGenerationContext, VisualContent};

pub const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

/// Upward-pointing triangle: bottom-left, top-middle, bottom-right, all in
/// one tint.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Vertex; 3],
    tint: Color,
}

impl Triangle {
    pub const DEFAULT_TINT: Color = Color::RED;

    pub fn new() -> Self {
        Self::with_tint(Self::DEFAULT_TINT)
    }

    pub fn with_tint(tint: Color) -> Self {
        Self { vertices: [Vertex::default(); 3], tint }
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    pub fn indices(&self) -> &'static [u16; 3] {
        &TRIANGLE_INDICES
    }

    pub fn corners(size: Vec2) -> [Vec2; 3] {
        [Vec2::new(0.0, size.y), Vec2::new(size.x / 2.0, 0.0), Vec2::new(size.x, size.y)]
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualContent for Triangle {
    fn generate_visual_content(&mut self, mgc: &mut MeshGenerationContext<'_, '_>) {
        let corners = Self::corners(mgc.content_rect().size);
        for (v, corner) in self.vertices.iter_mut().zip(corners) {
            *v = Vertex::new(corner, self.tint);
        }

        let mut mwd = mgc.allocate(self.vertices.len(), TRIANGLE_INDICES.len());
        mwd.set_all_vertices(&self.vertices);
        mwd.set_all_indices(&TRIANGLE_INDICES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_engine::coords::Rect;
    use kite_engine::scene::DrawCmd;

    use crate::test_util::paint_once;
    use crate::widgets::polygon::Polygon;

    fn points(t: &Triangle) -> Vec<(f32, f32)> {
        t.vertices().iter().map(|v| (v.position[0], v.position[1])).collect()
    }

    #[test]
    fn hundred_by_fifty() {
        let mut w = Polygon::new(Triangle::new());
        paint_once(&mut w, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(points(w.shape()), vec![(0.0, 50.0), (50.0, 0.0), (100.0, 50.0)]);
    }

    #[test]
    fn corners_for_arbitrary_sizes() {
        for (w, h) in [(1.0, 2.0), (33.0, 0.25), (1920.0, 1080.0)] {
            assert_eq!(Triangle::corners(Vec2::new(w, h)), [
                Vec2::new(0.0, h),
                Vec2::new(w / 2.0, 0.0),
                Vec2::new(w, h),
            ]);
        }
    }

    #[test]
    fn single_tint_on_every_vertex_across_repaints() {
        let mut w = Polygon::new(Triangle::new());
        for size in [(10.0, 10.0), (300.0, 2.0), (0.0, 0.0)] {
            paint_once(&mut w, Rect::new(0.0, 0.0, size.0, size.1));
            assert!(w.shape().vertices().iter().all(|v| v.tint == Color::rgba(255, 0, 0, 255)));
        }
    }

    #[test]
    fn submits_one_triangle_per_repaint() {
        let mut w = Polygon::new(Triangle::new());
        let list = paint_once(&mut w, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(list.items().len(), 1);
        let DrawCmd::Mesh(cmd) = &list.items()[0].cmd else {
            panic!("triangle should record a mesh");
        };
        assert_eq!((cmd.slice.vertex_count(), cmd.slice.index_count()), (3, 3));
        assert_eq!(list.mesh().indices(), &[0, 1, 2]);
    }

    #[test]
    fn degenerate_rect_is_fine() {
        let mut w = Polygon::new(Triangle::new());
        paint_once(&mut w, Rect::new(0.0, 0.0, 0.0, 50.0));
        assert_eq!(points(w.shape()), vec![(0.0, 50.0), (0.0, 0.0), (0.0, 50.0)]);
    }

    #[test]
    fn custom_tint() {
        let mut w = Polygon::new(Triangle::with_tint(Color::BLUE));
        paint_once(&mut w, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(w.shape().vertices()[2].tint, Color::BLUE);
        assert_eq!(w.shape().tint(), Color::BLUE);
    }
}
