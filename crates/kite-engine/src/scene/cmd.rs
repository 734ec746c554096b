use super::shapes::{MeshCmd, RectCmd};

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a command module under `scene::shapes::*`
/// - add a variant here
/// - implement the `DrawList` push helper inside that module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Mesh(MeshCmd),
}
