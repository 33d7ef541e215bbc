//! # astfix-rules
//!
//! Built-in check and fix rules for astfix, and the traversals that apply them.
//!
//! ## Available Rules
//!
//! | Code | Name | Stage | Description |
//! |------|------|-------|-------------|
//! | TS001 | `call-super-in-constructor` | check | Derived-class constructors must call `super()` |
//! | TS101 | `use-let-never-reassigned` | fix | `let` that is never reassigned becomes `const` |
//! | TS102 | `double-quotes` | fix | `"..."` string literals become `'...'` |
//!
//! ## Usage
//!
//! ```
//! use astfix_core::{kind, AstNode, Config, MemorySink, RuleLevel};
//!
//! let root = AstNode::new(kind::SOURCE_FILE, "")
//!     .with_child(AstNode::new(kind::STRING_LITERAL, "\"hi\""));
//! let config = Config::new().with_rule("double-quotes", RuleLevel::Warn);
//!
//! let mut sink = MemorySink::new();
//! astfix_rules::fix(&root, 0, &config, &root, &mut sink);
//! assert_eq!(root.children()[0].text().as_str(), "'hi'");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod call_super_in_constructor;
mod checker;
mod double_quotes;
mod fixer;
mod presets;
mod use_let_never_reassigned;

pub use call_super_in_constructor::CallSuperInConstructor;
pub use checker::{check, Checker};
pub use double_quotes::DoubleQuotes;
pub use fixer::{fix, Fixer};
pub use presets::{fix_rules, lint_rules, rule_catalog, rule_names, RuleInfo, RuleStage};
pub use use_let_never_reassigned::{is_never_reassigned, UseLetNeverReassigned};

/// Re-export core types for convenience.
pub use astfix_core::{FixRule, LintRule, Verdict, Violation};
