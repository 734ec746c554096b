use core::ops::Range;

use bytemuck::Zeroable;

use crate::coords::Vec2;

use super::{MeshError, Vertex};

/// Largest vertex count a single allocation may request: every vertex must be
/// addressable by a widget-local `u16` index.
pub const MAX_VERTICES_PER_ALLOCATION: usize = u16::MAX as usize + 1;

/// Location of one allocation inside a [`MeshBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSlice {
    pub vertices: Range<u32>,
    pub indices: Range<u32>,
}

impl MeshSlice {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Host-owned vertex/index storage for one frame.
///
/// `clear()` keeps capacity, so a steady-state UI stops allocating after the
/// first few frames.
#[derive(Debug, Default)]
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Buffer-global indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertices of a single allocation.
    pub fn slice_vertices(&self, slice: &MeshSlice) -> &[Vertex] {
        &self.vertices[slice.vertices.start as usize..slice.vertices.end as usize]
    }

    /// Indices of a single allocation, still buffer-global.
    pub fn slice_indices(&self, slice: &MeshSlice) -> &[u32] {
        &self.indices[slice.indices.start as usize..slice.indices.end as usize]
    }

    /// Raw vertex bytes, ready for a GPU upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices[..])
    }

    /// Raw index bytes (`u32` little/native endian), ready for a GPU upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices[..])
    }

    /// Checks a request and returns the slice it would occupy, without
    /// touching the buffer.
    pub fn plan(&self, vertex_count: usize, index_count: usize) -> Result<MeshSlice, MeshError> {
        if vertex_count > MAX_VERTICES_PER_ALLOCATION {
            return Err(MeshError::TooManyVertices { requested: vertex_count });
        }
        if index_count % 3 != 0 {
            return Err(MeshError::PartialTriangle { index_count });
        }

        let v_end = self.vertices.len() + vertex_count;
        let i_end = self.indices.len() + index_count;
        if v_end > u32::MAX as usize || i_end > u32::MAX as usize {
            return Err(MeshError::BufferFull { vertices: v_end, indices: i_end });
        }

        Ok(MeshSlice {
            vertices: self.vertices.len() as u32..v_end as u32,
            indices: self.indices.len() as u32..i_end as u32,
        })
    }

    /// Reserves slots and returns the view the caller must fill completely.
    ///
    /// `offset` is added to every vertex position written through the view,
    /// mapping widget-local coordinates into frame space.
    pub fn try_allocate(
        &mut self,
        vertex_count: usize,
        index_count: usize,
        offset: Vec2,
    ) -> Result<MeshWriteData<'_>, MeshError> {
        let slice = self.plan(vertex_count, index_count)?;
        let v_start = slice.vertices.start as usize;
        let i_start = slice.indices.start as usize;

        self.vertices.resize(v_start + vertex_count, Vertex::zeroed());
        self.indices.resize(i_start + index_count, 0);

        log::trace!(
            "mesh allocate: {vertex_count} vertices @{v_start}, {index_count} indices @{i_start}"
        );

        Ok(MeshWriteData {
            vertices: &mut self.vertices[v_start..],
            indices: &mut self.indices[i_start..],
            base_vertex: slice.vertices.start,
            offset,
            vertices_written: 0,
            indices_written: 0,
        })
    }

    /// Like [`try_allocate`](Self::try_allocate), but a rejected request is a
    /// contract violation.
    ///
    /// # Panics
    /// When the request is rejected (see [`MeshError`]).
    pub fn allocate(&mut self, vertex_count: usize, index_count: usize, offset: Vec2) -> MeshWriteData<'_> {
        match self.try_allocate(vertex_count, index_count, offset) {
            Ok(data) => data,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Writable view over one allocation.
///
/// Every reserved vertex and index must be written before the view is
/// dropped. Writing more or fewer than reserved, or writing an index that
/// does not address a vertex of this allocation, panics: a short write would
/// otherwise leave zeroed triangles in the frame.
pub struct MeshWriteData<'a> {
    vertices: &'a mut [Vertex],
    indices: &'a mut [u32],
    base_vertex: u32,
    offset: Vec2,
    vertices_written: usize,
    indices_written: usize,
}

impl MeshWriteData<'_> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.vertices_written == self.vertices.len() && self.indices_written == self.indices.len()
    }

    /// Writes all reserved vertices at once.
    ///
    /// # Panics
    /// When `vertices.len()` differs from the reserved vertex count.
    pub fn set_all_vertices(&mut self, vertices: &[Vertex]) {
        assert_eq!(
            vertices.len(),
            self.vertices.len(),
            "set_all_vertices: wrote {} vertices into an allocation of {}",
            vertices.len(),
            self.vertices.len()
        );
        for (dst, v) in self.vertices.iter_mut().zip(vertices) {
            *dst = v.translated(self.offset);
        }
        self.vertices_written = self.vertices.len();
    }

    /// Writes all reserved indices at once. Indices are local to this allocation.
    ///
    /// # Panics
    /// When `indices.len()` differs from the reserved index count, or an
    /// index is out of range.
    pub fn set_all_indices(&mut self, indices: &[u16]) {
        assert_eq!(
            indices.len(),
            self.indices.len(),
            "set_all_indices: wrote {} indices into an allocation of {}",
            indices.len(),
            self.indices.len()
        );
        for (slot, &i) in indices.iter().enumerate() {
            self.write_index(slot, i);
        }
        self.indices_written = self.indices.len();
    }

    /// Writes the next vertex.
    ///
    /// # Panics
    /// When every reserved vertex was already written.
    pub fn set_next_vertex(&mut self, vertex: Vertex) {
        let slot = self.vertices_written;
        assert!(
            slot < self.vertices.len(),
            "set_next_vertex: allocation of {} vertices is already full",
            self.vertices.len()
        );
        self.vertices[slot] = vertex.translated(self.offset);
        self.vertices_written += 1;
    }

    /// Writes the next local index.
    ///
    /// # Panics
    /// When every reserved index was already written, or `index` is out of range.
    pub fn set_next_index(&mut self, index: u16) {
        let slot = self.indices_written;
        assert!(
            slot < self.indices.len(),
            "set_next_index: allocation of {} indices is already full",
            self.indices.len()
        );
        self.write_index(slot, index);
        self.indices_written += 1;
    }

    fn write_index(&mut self, slot: usize, index: u16) {
        assert!(
            (index as usize) < self.vertices.len(),
            "mesh index {index} out of range for an allocation of {} vertices",
            self.vertices.len()
        );
        self.indices[slot] = self.base_vertex + index as u32;
    }
}

impl Drop for MeshWriteData<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        assert!(
            self.is_complete(),
            "mesh allocation dropped incomplete: {}/{} vertices, {}/{} indices written",
            self.vertices_written,
            self.vertices.len(),
            self.indices_written,
            self.indices.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn tri(color: Color) -> [Vertex; 3] {
        [
            Vertex::new(Vec2::new(0.0, 10.0), color),
            Vertex::new(Vec2::new(5.0, 0.0), color),
            Vertex::new(Vec2::new(10.0, 10.0), color),
        ]
    }

    #[test]
    fn second_allocation_rebases_indices() {
        let mut buf = MeshBuffer::new();
        {
            let mut w = buf.allocate(3, 3, Vec2::zero());
            w.set_all_vertices(&tri(Color::RED));
            w.set_all_indices(&[0, 1, 2]);
        }
        {
            let mut w = buf.allocate(3, 3, Vec2::zero());
            w.set_all_vertices(&tri(Color::BLUE));
            w.set_all_indices(&[2, 1, 0]);
        }
        assert_eq!(buf.indices(), &[0, 1, 2, 5, 4, 3]);
        assert_eq!(buf.vertices().len(), 6);
        assert_eq!(buf.vertices()[3].tint, Color::BLUE);
    }

    #[test]
    fn offset_translates_positions() {
        let mut buf = MeshBuffer::new();
        {
            let mut w = buf.allocate(3, 3, Vec2::new(100.0, 20.0));
            w.set_all_vertices(&tri(Color::RED));
            w.set_all_indices(&[0, 1, 2]);
        }
        assert_eq!(buf.vertices()[0].xy(), Vec2::new(100.0, 30.0));
        assert_eq!(buf.vertices()[1].xy(), Vec2::new(105.0, 20.0));
    }

    #[test]
    fn incremental_writes_fill_the_allocation() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(3, 3, Vec2::zero());
        for v in tri(Color::GREEN) {
            w.set_next_vertex(v);
        }
        assert!(!w.is_complete());
        for i in [0, 1, 2] {
            w.set_next_index(i);
        }
        assert!(w.is_complete());
    }

    #[test]
    fn plan_rejects_bad_requests() {
        let buf = MeshBuffer::new();
        assert_eq!(
            buf.plan(MAX_VERTICES_PER_ALLOCATION + 1, 3),
            Err(MeshError::TooManyVertices { requested: MAX_VERTICES_PER_ALLOCATION + 1 })
        );
        assert_eq!(buf.plan(4, 4), Err(MeshError::PartialTriangle { index_count: 4 }));
        assert_eq!(buf.plan(4, 6).map(|s| (s.vertex_count(), s.index_count())), Ok((4, 6)));
    }

    #[test]
    fn empty_allocation_is_complete() {
        let mut buf = MeshBuffer::new();
        let w = buf.allocate(0, 0, Vec2::zero());
        assert!(w.is_complete());
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut buf = MeshBuffer::new();
        {
            let mut w = buf.allocate(3, 3, Vec2::zero());
            w.set_all_vertices(&tri(Color::RED));
            w.set_all_indices(&[0, 1, 2]);
        }
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.vertices().is_empty());
        assert_eq!(buf.vertex_bytes().len(), 0);
    }

    #[test]
    fn byte_views_cover_every_element() {
        let mut buf = MeshBuffer::new();
        {
            let mut w = buf.allocate(3, 3, Vec2::zero());
            w.set_all_vertices(&tri(Color::RED));
            w.set_all_indices(&[0, 1, 2]);
        }
        assert_eq!(buf.vertex_bytes().len(), 3 * 16);
        assert_eq!(buf.index_bytes().len(), 3 * 4);
    }

    #[test]
    #[should_panic(expected = "set_all_vertices")]
    fn vertex_count_mismatch_panics() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(4, 6, Vec2::zero());
        w.set_all_vertices(&tri(Color::RED));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_vertices_panics() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(3, 3, Vec2::zero());
        w.set_all_vertices(&tri(Color::RED));
        w.set_all_indices(&[0, 1, 3]);
    }

    #[test]
    #[should_panic(expected = "dropped incomplete")]
    fn short_write_panics_on_drop() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(3, 3, Vec2::zero());
        w.set_all_vertices(&tri(Color::RED));
    }

    #[test]
    #[should_panic(expected = "set_all_indices")]
    fn index_count_mismatch_panics() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(3, 3, Vec2::zero());
        w.set_all_vertices(&tri(Color::RED));
        w.set_all_indices(&[0, 1, 2, 2, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "set_next_index: allocation of 3 indices is already full")]
    fn index_past_the_end_panics() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(3, 3, Vec2::zero());
        w.set_all_vertices(&tri(Color::RED));
        w.set_all_indices(&[0, 1, 2]);
        w.set_next_index(0);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 3")]
    fn allocate_panics_on_rejected_request() {
        let mut buf = MeshBuffer::new();
        let _ = buf.allocate(3, 4, Vec2::zero());
    }

    #[test]
    #[should_panic(expected = "already full")]
    fn writing_past_the_end_panics() {
        let mut buf = MeshBuffer::new();
        let mut w = buf.allocate(0, 0, Vec2::zero());
        w.set_next_vertex(Vertex::default());
    }
}
