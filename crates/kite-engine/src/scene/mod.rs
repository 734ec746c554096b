//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands plus the frame's mesh storage
//! - provide deterministic ordering (z-index, then insertion order)
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::{MeshCmd, RectCmd};
