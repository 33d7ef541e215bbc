//! # astfix-core
//!
//! Core model for the astfix analyze / fix / regenerate pipeline.
//!
//! This crate provides the pieces every stage shares:
//!
//! - [`AstNode`], the generic `(kind, text, children)` syntax tree
//! - [`kind`], the kind vocabulary the stages dispatch on
//! - [`Config`] with per-rule [`RuleLevel`]s and a [`Verbosity`]
//! - [`LogSink`] for traversal and rule logging
//! - [`LintRule`] and [`FixRule`] traits
//! - [`Violation`] and [`LintResult`] for reporting lint findings
//!
//! ## Example
//!
//! ```
//! use astfix_core::{AstNode, kind};
//!
//! let literal = AstNode::new(kind::STRING_LITERAL, "\"Hello\"");
//! literal.set_text("'Hello'");
//! assert_eq!(literal.text().as_str(), "'Hello'");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
pub mod kind;
mod log;
mod node;
mod rule;
mod types;

pub use config::{Config, ConfigError, RuleLevel, Verbosity};
pub use context::FileContext;
pub use log::{node_line, Level, LogSink, MemorySink, TracingSink};
pub use node::{AstNode, Span, Walk};
pub use rule::{FixRule, FixRuleBox, LintRule, LintRuleBox, Verdict};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
