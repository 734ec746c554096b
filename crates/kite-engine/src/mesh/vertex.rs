use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Depth every UI vertex is emitted at: the near end of the UI depth range,
/// so widget geometry sits in front of anything drawn behind the UI.
pub const NEAR_Z: f32 = -1.0;

/// A tinted UI vertex.
///
/// `#[repr(C)]` + `Pod` so a slice of vertices can be uploaded as raw bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tint: Color,
}

impl Vertex {
    /// Vertex at `pos`, on the UI near plane.
    #[inline]
    pub const fn new(pos: Vec2, tint: Color) -> Self {
        Self { position: [pos.x, pos.y, NEAR_Z], tint }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }

    #[inline]
    pub fn translated(self, by: Vec2) -> Self {
        Self {
            position: [self.position[0] + by.x, self.position[1] + by.y, self.position[2]],
            tint: self.tint,
        }
    }
}
