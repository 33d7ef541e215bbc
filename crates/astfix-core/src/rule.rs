//! Rule traits for checks and fixes over the generic tree.

use crate::node::AstNode;

/// Outcome of running a [`LintRule`] on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The rule does not apply or is satisfied.
    Clean,
    /// The node violates the rule.
    Violated(String),
    /// The node is missing structure the rule relies on. Checking of this
    /// node and its whole subtree stops here.
    Halt,
}

/// A read-only check applied to every node.
///
/// # Example
///
/// ```ignore
/// use astfix_core::{AstNode, LintRule, Verdict};
///
/// pub struct NoEmptyClass;
///
/// impl LintRule for NoEmptyClass {
///     fn name(&self) -> &'static str { "no-empty-class" }
///     fn code(&self) -> &'static str { "TS900" }
///
///     fn check(&self, node: &AstNode) -> Verdict {
///         if node.is("ClassDeclaration") && node.children().len() == 1 {
///             Verdict::Violated("Class has no members".into())
///         } else {
///             Verdict::Clean
///         }
///     }
/// }
/// ```
pub trait LintRule {
    /// Returns the kebab-case name of this rule, used as the config key.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Optional hint attached to every violation of this rule.
    fn suggestion(&self) -> Option<&'static str> {
        None
    }

    /// Checks a single node. Recursion into children is the caller's job.
    fn check(&self, node: &AstNode) -> Verdict;
}

/// Type alias for boxed [`LintRule`] trait objects.
pub type LintRuleBox = Box<dyn LintRule>;

/// A rewrite applied to a node's text.
pub trait FixRule {
    /// Returns the kebab-case name of this rule, used as the config key.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TS101").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule rewrites.
    fn description(&self) -> &'static str {
        ""
    }

    /// Message logged at info level whenever the fix is applied.
    fn message(&self) -> &'static str;

    /// Computes the replacement text for `node`, or `None` to leave it be.
    ///
    /// `root` is the root of the whole tree `node` belongs to, for rules
    /// that need context beyond the node itself.
    fn fix(&self, node: &AstNode, root: &AstNode) -> Option<String>;
}

/// Type alias for boxed [`FixRule`] trait objects.
pub type FixRuleBox = Box<dyn FixRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperIdentifiers;

    impl FixRule for UpperIdentifiers {
        fn name(&self) -> &'static str {
            "upper-identifiers"
        }
        fn code(&self) -> &'static str {
            "TEST101"
        }
        fn message(&self) -> &'static str {
            "Uppercased identifier"
        }
        fn fix(&self, node: &AstNode, _root: &AstNode) -> Option<String> {
            let text = node.text();
            (node.is("Identifier") && *text != text.to_uppercase()).then(|| text.to_uppercase())
        }
    }

    struct Always;

    impl LintRule for Always {
        fn name(&self) -> &'static str {
            "always"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn check(&self, _node: &AstNode) -> Verdict {
            Verdict::Violated("always".into())
        }
    }

    #[test]
    fn test_fix_rule_trait() {
        let node = AstNode::new("Identifier", "dog");
        let rule = UpperIdentifiers;
        assert_eq!(rule.fix(&node, &node).as_deref(), Some("DOG"));
        node.set_text("DOG");
        assert_eq!(rule.fix(&node, &node), None);
        assert_eq!(rule.description(), "");
    }

    #[test]
    fn test_lint_rule_trait() {
        let rule = Always;
        assert_eq!(rule.name(), "always");
        assert!(rule.suggestion().is_none());
        assert_eq!(
            rule.check(&AstNode::new("Block", "{}")),
            Verdict::Violated("always".into())
        );
    }
}
