//! # astfix-codegen
//!
//! Rebuilds TypeScript source from the generic [`astfix_core::AstNode`] tree.
//!
//! Rendering runs in two phases: the [`Reconstructor`] maps each generic
//! node onto a [`ConcreteNode`] by kind, then the [`Printer`] serializes the
//! concrete tree. Coverage is intentionally narrow; anything outside it
//! fails the whole render with a [`RenderError`].
//!
//! ```
//! use astfix_core::{kind, AstNode};
//!
//! let decl = AstNode::new(kind::VARIABLE_DECLARATION, "a = 'x'").with_children(vec![
//!     AstNode::new(kind::IDENTIFIER, "a"),
//!     AstNode::new(kind::STRING_LITERAL, "'x'"),
//! ]);
//! let list = AstNode::new(kind::VARIABLE_DECLARATION_LIST, "const a = 'x'").with_child(decl);
//!
//! assert_eq!(astfix_codegen::render(&list).unwrap(), "const a = 'x';");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod concrete;
mod error;
mod printer;
mod reconstruct;

pub use concrete::ConcreteNode;
pub use error::RenderError;
pub use printer::{NewLine, Printer};
pub use reconstruct::{render, Reconstructor};
