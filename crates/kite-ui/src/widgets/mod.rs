//! Built-in widgets.
//!
//! `diamond` and `triangle` are mesh shapes hosted by [`polygon::Polygon`];
//! `flex` and `container` are the layout primitives used to place them.

pub mod container;
pub mod diamond;
pub mod flex;
pub mod polygon;
pub mod triangle;
