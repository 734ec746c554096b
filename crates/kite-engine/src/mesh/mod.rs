//! Per-frame mesh storage and the write surface widgets submit geometry through.
//!
//! Flow for one widget in one frame:
//! 1. the host reserves `vertex_count` / `index_count` slots ([`MeshBuffer::allocate`]);
//! 2. the widget fills them through the returned [`MeshWriteData`];
//! 3. the view is dropped, and the slots stay in the buffer until the next `clear`.
//!
//! Indices are written widget-local (`0..vertex_count`) and stored rebased
//! onto the allocation's first vertex, so consumers can draw the whole buffer
//! with a single index stream.

mod buffer;
mod error;
mod vertex;

pub use buffer::{MeshBuffer, MeshSlice, MeshWriteData, MAX_VERTICES_PER_ALLOCATION};
pub use error::MeshError;
pub use vertex::{Vertex, NEAR_Z};
