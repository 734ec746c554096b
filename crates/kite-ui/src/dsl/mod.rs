//! `.kml` markup → widget tree.
//!
//! Parsing lives in `kite-kml`; this module turns a parsed [`Document`] into
//! [`Element`](crate::widget::Element)s through a name → factory registry.
//!
//! ```kml
//! import "badge.kml" as Badge
//!
//! Row {
//!     gap: 8  align: center
//!     Diamond  { width: 100  height: 50 }
//!     Triangle { width: 100  height: 50  tint: #ff0000 }
//!     Badge
//! }
//! ```
//!
//! ```rust,ignore
//! let mut loader = DslLoader::new();
//! loader.parse_and_register("Badge", include_str!("../ui/badge.kml"))?;
//! loader.register_widget("Spacer", |node, _ctx| {
//!     let h = props::number(node, "height")?.unwrap_or(8.0);
//!     Ok(Container::new().min_size(0.0, h).into())
//! });
//!
//! let doc = loader.parse(include_str!("../ui/main.kml"))?;
//! let root = loader.build(&doc)?;
//! ```

pub mod builder;
mod builtins;
pub mod error;
pub mod props;

pub use builder::{BuildCtx, DslLoader, WidgetFactory};
pub use error::BuildError;
pub use kite_kml::{parse_str, Document, Node, ParseError, Value};
