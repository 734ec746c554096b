//! Lexer, parser, and AST for the **Kite markup language** (`.kml`).
//!
//! The crate has no dependencies so editors and linters can use it without
//! the engine.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Prop`, `Value`, `Import` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `Spanned` |
//! | [`parser`] | `parse_str` entry point |
//!
//! ```rust
//! use kite_kml::parse_str;
//!
//! let doc = parse_str(r#"
//!     Row {
//!         gap: 8
//!         Diamond  { width: 100  height: 50 }
//!         Triangle { width: 100  height: 50 }
//!     }
//! "#).unwrap();
//! assert_eq!(doc.root.children.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, Value};
pub use error::ParseError;
pub use parser::parse_str;
