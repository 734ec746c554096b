//! Kite engine crate.
//!
//! Owns the renderer-agnostic pieces the UI layer draws into: geometry,
//! colors, the per-frame mesh buffer and the sorted draw stream.

pub mod coords;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod scene;
