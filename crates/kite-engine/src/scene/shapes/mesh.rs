use crate::coords::Vec2;
use crate::mesh::{MeshError, MeshSlice, MeshWriteData};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Tinted triangle mesh payload: a slice of the list's [`MeshBuffer`](crate::mesh::MeshBuffer).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub slice: MeshSlice,
}

impl DrawList {
    /// Records a mesh draw command and returns the view its geometry must be
    /// written through. Positions written to the view are offset by `origin`.
    pub fn try_allocate_mesh(
        &mut self,
        z: ZIndex,
        origin: Vec2,
        vertex_count: usize,
        index_count: usize,
    ) -> Result<MeshWriteData<'_>, MeshError> {
        let slice = self.mesh.plan(vertex_count, index_count)?;
        self.push(z, DrawCmd::Mesh(MeshCmd { slice }));
        self.mesh.try_allocate(vertex_count, index_count, origin)
    }

    /// Panicking form of [`try_allocate_mesh`](Self::try_allocate_mesh).
    pub fn allocate_mesh(
        &mut self,
        z: ZIndex,
        origin: Vec2,
        vertex_count: usize,
        index_count: usize,
    ) -> MeshWriteData<'_> {
        match self.try_allocate_mesh(z, origin, vertex_count, index_count) {
            Ok(data) => data,
            Err(e) => panic!("{e}"),
        }
    }
}
