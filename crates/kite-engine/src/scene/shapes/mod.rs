pub(crate) mod mesh;
pub(crate) mod rect;

pub use mesh::MeshCmd;
pub use rect::RectCmd;
