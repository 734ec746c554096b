use kite_engine::coords::Vec2;
use kite_engine::mesh::Vertex;
use kite_engine::paint::Color;

use crate::painter::{MeshGenerationContext, VisualContent};

/// Two triangles fanning from the left corner: (0,1,2) then (2,3,0).
pub const DIAMOND_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Four-corner rhombus touching the midpoint of each content-rect edge.
///
/// Corners are ordered left, top, right, bottom, and each carries its own
/// tint. The vertex array is owned by the shape and rewritten in place on
/// every repaint.
#[derive(Debug, Clone)]
pub struct Diamond {
    vertices: [Vertex; 4],
    tints: [Color; 4],
}

impl Diamond {
    /// Red, green, blue and a dark teal, in corner order.
    pub const DEFAULT_TINTS: [Color; 4] = [
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::rgb(17, 55, 55),
    ];

    pub fn new() -> Self {
        Self::with_tints(Self::DEFAULT_TINTS)
    }

    pub fn with_tints(tints: [Color; 4]) -> Self {
        Self { vertices: [Vertex::default(); 4], tints }
    }

    pub fn tints(&self) -> [Color; 4] {
        self.tints
    }

    /// Vertices as of the last repaint.
    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.vertices
    }

    pub fn indices(&self) -> &'static [u16; 6] {
        &DIAMOND_INDICES
    }

    /// Edge midpoints of a `size` content rect: left, top, right, bottom.
    pub fn corners(size: Vec2) -> [Vec2; 4] {
        let (w, h) = (size.x, size.y);
        [
            Vec2::new(0.0, h / 2.0),
            Vec2::new(w / 2.0, 0.0),
            Vec2::new(w, h / 2.0),
            Vec2::new(w / 2.0, h),
        ]
    }
}

impl Default for Diamond {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualContent for Diamond {
    fn generate_visual_content(&mut self, mgc: &mut MeshGenerationContext<'_, '_>) {
        let size = mgc.content_rect().size;
        for ((v, corner), tint) in self.vertices.iter_mut().zip(Self::corners(size)).zip(self.tints) {
            *v = Vertex::new(corner, tint);
        }

        let mut mwd = mgc.allocate(self.vertices.len(), DIAMOND_INDICES.len());
        mwd.set_all_vertices(&self.vertices);
        mwd.set_all_indices(&DIAMOND_INDICES);
    }
}
