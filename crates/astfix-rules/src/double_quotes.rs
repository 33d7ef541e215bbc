//! Rule rewriting double-quoted string literals to single quotes.
//!
//! `"it's"` becomes `'it\'s'`. Literals that are already single-quoted, or
//! whose delimiters do not match, are left untouched.

use astfix_core::{kind, AstNode, FixRule};

/// Rule code for double-quotes.
pub const CODE: &str = "TS102";

/// Rule name for double-quotes.
pub const NAME: &str = "double-quotes";

/// Rewrites `"..."` string literals as `'...'`.
#[derive(Debug, Clone, Default)]
pub struct DoubleQuotes;

impl DoubleQuotes {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FixRule for DoubleQuotes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Rewrites double-quoted string literals to single quotes"
    }

    fn message(&self) -> &'static str {
        "Converted double quotes to single quotes"
    }

    fn fix(&self, node: &AstNode, _root: &AstNode) -> Option<String> {
        if !node.is(kind::STRING_LITERAL) {
            return None;
        }
        let text = node.text();
        let inner = text.trim().strip_prefix('"')?.strip_suffix('"')?;
        Some(format!("'{}'", escape_single_quotes(inner)))
    }
}

/// Escapes bare `'` characters, leaving existing escape sequences intact.
fn escape_single_quotes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}
