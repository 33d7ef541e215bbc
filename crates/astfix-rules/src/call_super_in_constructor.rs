//! Rule requiring derived-class constructors to call `super(...)`.
//!
//! # Detected Patterns
//!
//! A class with an `extends` clause whose constructor body does not start
//! with a `super(...)` call:
//!
//! ```ts
//! class Dog extends Animal {
//!     constructor(name: string) {
//!         this.name = name;
//!     }
//! }
//! ```
//!
//! # Structural early exit
//!
//! If the class has no constructor, the constructor has no body, or the
//! body has no expression statement, the rule returns [`Verdict::Halt`] and
//! the checker stops at that class without visiting its members.

use astfix_core::{kind, AstNode, LintRule, Verdict};

/// Rule code for call-super-in-constructor.
pub const CODE: &str = "TS001";

/// Rule name for call-super-in-constructor.
pub const NAME: &str = "call-super-in-constructor";

const MESSAGE: &str = "Constructor should call super() but does not";

/// Requires a `super(...)` call in constructors of derived classes.
#[derive(Debug, Clone, Default)]
pub struct CallSuperInConstructor;

impl CallSuperInConstructor {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LintRule for CallSuperInConstructor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires constructors of derived classes to call super()"
    }

    fn suggestion(&self) -> Option<&'static str> {
        Some("Call super(...) as the first statement of the constructor")
    }

    fn check(&self, node: &AstNode) -> Verdict {
        if !node.is(kind::CLASS_DECLARATION) || !node.has_child(kind::HERITAGE_CLAUSE) {
            return Verdict::Clean;
        }

        let Some(statement) = node
            .child(kind::CONSTRUCTOR)
            .and_then(|ctor| ctor.child(kind::BLOCK))
            .and_then(|body| body.child(kind::EXPRESSION_STATEMENT))
        else {
            return Verdict::Halt;
        };

        match statement.child(kind::CALL_EXPRESSION) {
            Some(call) if call.text().contains("super") => Verdict::Clean,
            _ => Verdict::Violated(MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(members: Vec<AstNode>, heritage: bool) -> AstNode {
        let mut children = vec![AstNode::new(kind::IDENTIFIER, "Dog")];
        if heritage {
            children.push(AstNode::new(kind::HERITAGE_CLAUSE, "extends Animal"));
        }
        children.extend(members);
        AstNode::new(kind::CLASS_DECLARATION, "class Dog").with_children(children)
    }

    fn constructor(first_statement: AstNode) -> AstNode {
        let body = AstNode::new(kind::BLOCK, "{}").with_child(first_statement);
        AstNode::new(kind::CONSTRUCTOR, "constructor() {}").with_child(body)
    }

    fn call_statement(text: &str) -> AstNode {
        AstNode::new(kind::EXPRESSION_STATEMENT, format!("{text};"))
            .with_child(AstNode::new(kind::CALL_EXPRESSION, text))
    }

    #[test]
    fn super_call_is_clean() {
        let node = class(vec![constructor(call_statement("super(name)"))], true);
        assert_eq!(CallSuperInConstructor.check(&node), Verdict::Clean);
    }

    #[test]
    fn other_call_is_violation() {
        let node = class(vec![constructor(call_statement("init(name)"))], true);
        assert_eq!(
            CallSuperInConstructor.check(&node),
            Verdict::Violated(MESSAGE.into())
        );
    }

    #[test]
    fn statement_without_call_is_violation() {
        let assignment = AstNode::new(kind::EXPRESSION_STATEMENT, "this.a = 1;")
            .with_child(AstNode::new(kind::BINARY_EXPRESSION, "this.a = 1"));
        let node = class(vec![constructor(assignment)], true);
        assert!(matches!(
            CallSuperInConstructor.check(&node),
            Verdict::Violated(_)
        ));
    }

    #[test]
    fn base_class_is_not_checked() {
        let node = class(vec![constructor(call_statement("init()"))], false);
        assert_eq!(CallSuperInConstructor.check(&node), Verdict::Clean);
    }

    #[test]
    fn missing_constructor_halts() {
        let node = class(vec![], true);
        assert_eq!(CallSuperInConstructor.check(&node), Verdict::Halt);
    }

    #[test]
    fn empty_body_halts() {
        let ctor = AstNode::new(kind::CONSTRUCTOR, "constructor() {}")
            .with_child(AstNode::new(kind::BLOCK, "{}"));
        let node = class(vec![ctor], true);
        assert_eq!(CallSuperInConstructor.check(&node), Verdict::Halt);
    }

    #[test]
    fn other_kinds_are_clean() {
        assert_eq!(
            CallSuperInConstructor.check(&AstNode::new(kind::IDENTIFIER, "x")),
            Verdict::Clean
        );
    }
}
