//! # astfix-ts
//!
//! Tree-sitter based TypeScript front end for astfix.
//!
//! [`TypeScriptParser`] parses `.ts`/`.tsx` source with
//! `tree-sitter-typescript` and lowers the concrete tree into the generic
//! [`astfix_core::AstNode`] model, labelled with TypeScript compiler kind
//! names (`SourceFile`, `VariableStatement`, `StringLiteral`, …).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod lower;
pub mod parser;

pub use parser::{ParseError, TypeScriptParser};
