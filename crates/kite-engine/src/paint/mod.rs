//! Paint model shared between UI and consumers of the draw stream.
//!
//! Scope is deliberately small: a single byte-per-channel [`Color`] used both
//! for vertex tints and solid fills. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
