use std::fmt;

/// Rejected mesh allocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// More vertices than a `u16` index can address.
    TooManyVertices { requested: usize },
    /// Index count is not a whole number of triangles.
    PartialTriangle { index_count: usize },
    /// The frame's buffer would exceed the `u32` range of global indices.
    BufferFull { vertices: usize, indices: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::TooManyVertices { requested } => write!(
                f,
                "mesh allocation of {requested} vertices exceeds the per-allocation limit of {}",
                super::MAX_VERTICES_PER_ALLOCATION
            ),
            MeshError::PartialTriangle { index_count } => write!(
                f,
                "mesh allocation of {index_count} indices is not a multiple of 3"
            ),
            MeshError::BufferFull { vertices, indices } => write!(
                f,
                "frame mesh buffer full ({vertices} vertices, {indices} indices)"
            ),
        }
    }
}

impl std::error::Error for MeshError {}
