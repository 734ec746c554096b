//! Kite UI: a retained widget tree on top of `kite-engine`.
//!
//! Widgets measure and paint into a per-frame `DrawList`. Shapes that produce
//! their own geometry implement [`VisualContent`](painter::VisualContent) and
//! are hosted by [`Polygon`](widgets::polygon::Polygon).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kite_ui::prelude::*;
//!
//! let mut ui = UiScene::new();
//! let mut root: Element = Flex::row()
//!     .gap(8.0)
//!     .child(Polygon::new(Diamond::new()).size(100.0, 50.0))
//!     .child(Polygon::new(Triangle::new()).size(100.0, 50.0))
//!     .into();
//!
//! let draw_list = ui.frame(&mut root, Vec2::new(320.0, 200.0));
//! // Hand draw_list.mesh() to a renderer.
//! ```
//!
//! # Custom shapes
//!
//! ```rust,ignore
//! use kite_ui::prelude::*;
//!
//! struct Wedge;
//!
//! impl VisualContent for Wedge {
//!     fn generate_visual_content(&mut self, mgc: &mut MeshGenerationContext<'_, '_>) {
//!         let r = mgc.content_rect();
//!         let mut mwd = mgc.allocate(3, 3);
//!         mwd.set_all_vertices(&[
//!             Vertex::new(Vec2::zero(), Color::WHITE),
//!             Vertex::new(Vec2::new(r.width(), 0.0), Color::WHITE),
//!             Vertex::new(Vec2::new(0.0, r.height()), Color::WHITE),
//!         ]);
//!         mwd.set_all_indices(&[0, 1, 2]);
//!     }
//! }
//!
//! let wedge = Polygon::new(Wedge).size(40.0, 40.0);
//! ```

pub mod app;
pub mod constraints;
pub mod dsl;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything needed to build and extend UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::painter::{MeshGenerationContext, Painter, VisualContent};
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        container::Container,
        diamond::Diamond,
        flex::{Align, Axis, Flex},
        polygon::Polygon,
        triangle::Triangle,
    };

    pub use kite_engine::coords::{Rect, Vec2};
    pub use kite_engine::mesh::{MeshWriteData, Vertex};
    pub use kite_engine::paint::Color;

    pub use crate::dsl::{BuildCtx, BuildError, DslLoader, ParseError};

    pub use crate::app::Application;
}
