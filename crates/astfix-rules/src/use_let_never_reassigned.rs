//! Rule rewriting `let` declarations that are never reassigned to `const`.
//!
//! A declaration list starting with `let` is converted when no assignment
//! (`x = ...`, `x += ...`, …) or increment/decrement (`x++`, `--x`) targets
//! any of its names anywhere in the file. Matching is by name only; there
//! is no scope resolution, so a shadowing reassignment in another scope
//! keeps the outer `let`.

use astfix_core::{kind, AstNode, FixRule};

/// Rule code for use-let-never-reassigned.
pub const CODE: &str = "TS101";

/// Rule name for use-let-never-reassigned.
pub const NAME: &str = "use-let-never-reassigned";

const MUTABLE_KEYWORD: &str = "let";
const IMMUTABLE_KEYWORD: &str = "const";

/// Converts never-reassigned `let` bindings to `const`.
#[derive(Debug, Clone, Default)]
pub struct UseLetNeverReassigned;

impl UseLetNeverReassigned {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FixRule for UseLetNeverReassigned {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Rewrites let declarations that are never reassigned to const"
    }

    fn message(&self) -> &'static str {
        "Replaced let with const"
    }

    fn fix(&self, node: &AstNode, root: &AstNode) -> Option<String> {
        if !node.is(kind::VARIABLE_DECLARATION_LIST) {
            return None;
        }
        let text = node.text();
        let rest = text.trim_start();
        let indent = &text[..text.len() - rest.len()];
        let after_keyword = strip_keyword(rest, MUTABLE_KEYWORD)?;

        let names = node
            .children()
            .iter()
            .filter(|c| c.is(kind::VARIABLE_DECLARATION))
            .map(bound_name)
            .collect::<Option<Vec<_>>>()?;
        if names.is_empty() || !is_never_reassigned(root, node, &names) {
            return None;
        }

        Some(format!("{indent}{IMMUTABLE_KEYWORD}{after_keyword}"))
    }
}

/// Name bound by a declaration that can become `const`.
///
/// `None` for destructuring patterns and for declarations without an
/// initializer, since `const x;` is not valid.
fn bound_name(declaration: &AstNode) -> Option<String> {
    let (name, rest) = declaration.children().split_first()?;
    if !name.is(kind::IDENTIFIER) {
        return None;
    }
    rest.iter()
        .any(|c| !kind::is_type(c.kind()))
        .then(|| name.text_owned())
}

/// Returns `text` after a leading `keyword` that ends at a word boundary.
fn strip_keyword<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' || c == '$' => None,
        _ => Some(rest),
    }
}

/// Returns true when nothing under `root`, other than `exclude` and its
/// subtree, reassigns any of `names`.
#[must_use]
pub fn is_never_reassigned(root: &AstNode, exclude: &AstNode, names: &[String]) -> bool {
    !reassigns(root, exclude, names)
}

fn reassigns(node: &AstNode, exclude: &AstNode, names: &[String]) -> bool {
    if node.same_node(exclude) {
        return false;
    }
    if assignment_target(node).is_some_and(|target| {
        target.is(kind::IDENTIFIER) && names.iter().any(|n| *n == *target.text())
    }) {
        return true;
    }
    node.children()
        .iter()
        .any(|child| reassigns(child, exclude, names))
}

fn assignment_target(node: &AstNode) -> Option<&AstNode> {
    match node.kind() {
        kind::BINARY_EXPRESSION => {
            let [left, operator, ..] = node.children() else {
                return None;
            };
            kind::is_assignment_operator(operator.kind()).then_some(left)
        }
        kind::PREFIX_UNARY_EXPRESSION | kind::POSTFIX_UNARY_EXPRESSION => {
            let text = node.text();
            let text = text.trim();
            let updates = ["++", "--"]
                .iter()
                .any(|op| text.starts_with(*op) || text.ends_with(*op));
            if updates {
                node.children().first()
            } else {
                None
            }
        }
        _ => None,
    }
}
