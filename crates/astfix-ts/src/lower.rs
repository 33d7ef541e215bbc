//! Lowering of tree-sitter TypeScript trees into the generic tree.
//!
//! tree-sitter produces a concrete tree with punctuation and keyword tokens
//! as anonymous nodes. The generic tree keeps only the syntactically
//! meaningful children, in source order, labelled with the TypeScript
//! compiler's kind names. Wrapper nodes that have no counterpart there
//! (`class_body`, `formal_parameters`, `arguments`, `type_annotation`, …)
//! are dissolved into their parent.

use astfix_core::{kind, AstNode, Span};
use tree_sitter::Node;

/// tree-sitter kinds whose named children are spliced into the parent.
const TRANSPARENT: &[&str] = &[
    "class_heritage",
    "class_body",
    "formal_parameters",
    "arguments",
    "type_annotation",
    "type_arguments",
    "else_clause",
    "finally_clause",
    "template_substitution",
    "switch_body",
    "enum_body",
    "interface_body",
];

pub(crate) struct Lowerer<'s> {
    src: &'s str,
}

impl<'s> Lowerer<'s> {
    pub(crate) fn new(src: &'s str) -> Self {
        Self { src }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        self.src.get(node.start_byte()..node.end_byte()).unwrap_or("")
    }

    fn span(node: Node<'_>) -> Span {
        Span::new(node.start_byte(), node.end_byte())
    }

    fn leaf(&self, kind: &str, node: Node<'_>) -> AstNode {
        AstNode::new(kind, self.text(node)).with_span(Self::span(node))
    }

    fn branch(&self, kind: &str, node: Node<'_>, children: Vec<AstNode>) -> AstNode {
        self.leaf(kind, node).with_children(children)
    }

    /// Lowers the `program` root into a `SourceFile`.
    pub(crate) fn lower_program(&self, root: Node<'_>) -> AstNode {
        let mut children = self.lower_children(root);
        let end = self.src.len();
        children.push(AstNode::new(kind::END_OF_FILE_TOKEN, "").with_span(Span::new(end, end)));
        AstNode::new(kind::SOURCE_FILE, self.src)
            .with_span(Span::new(0, end))
            .with_children(children)
    }

    /// Lowers the named children of `node`, splicing transparent wrappers.
    fn lower_children(&self, node: Node<'_>) -> Vec<AstNode> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        if !cursor.goto_first_child() {
            return out;
        }
        loop {
            let child = cursor.node();
            if cursor.field_name() == Some("name") && child.kind() == "type_identifier" {
                // Declaration names are identifiers, not type references.
                out.push(self.leaf(kind::IDENTIFIER, child));
            } else {
                self.lower_into(child, &mut out);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        out
    }

    fn lower_into(&self, node: Node<'_>, out: &mut Vec<AstNode>) {
        // Top-level ERROR nodes are flagged as extras too.
        if node.is_error() {
            out.push(self.lower(node));
            return;
        }
        if !node.is_named() || node.is_extra() || node.kind() == "hash_bang_line" {
            return;
        }
        if TRANSPARENT.contains(&node.kind()) {
            out.extend(self.lower_children(node));
            return;
        }
        out.push(self.lower(node));
    }

    fn lower(&self, node: Node<'_>) -> AstNode {
        match node.kind() {
            "lexical_declaration" | "variable_declaration" => self.lower_variable_statement(node),
            "variable_declarator" => {
                self.branch(kind::VARIABLE_DECLARATION, node, self.lower_children(node))
            }

            "identifier" | "property_identifier" | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern" | "undefined" => {
                self.leaf(kind::IDENTIFIER, node)
            }
            "private_property_identifier" => self.leaf(kind::PRIVATE_IDENTIFIER, node),
            "this" => self.leaf(kind::THIS_KEYWORD, node),
            "super" => self.leaf(kind::SUPER_KEYWORD, node),

            "predefined_type" => self.leaf(keyword_type(self.text(node)), node),
            "type_identifier" | "nested_type_identifier" => {
                let name = self.leaf(kind::IDENTIFIER, node);
                self.branch(kind::TYPE_REFERENCE, node, vec![name])
            }
            "generic_type" => self.branch(kind::TYPE_REFERENCE, node, self.lower_children(node)),
            "object_type" => self.branch("TypeLiteral", node, self.lower_children(node)),

            "string" => self.leaf(kind::STRING_LITERAL, node),
            "number" => self.leaf(kind::NUMERIC_LITERAL, node),
            "true" => self.leaf(kind::TRUE_KEYWORD, node),
            "false" => self.leaf(kind::FALSE_KEYWORD, node),
            "null" => self.leaf(kind::NULL_KEYWORD, node),
            "regex" => self.leaf(kind::REGULAR_EXPRESSION_LITERAL, node),
            "template_string" => self.lower_template(node),

            "assignment_expression" => {
                self.lower_binary(node, kind::EQUALS_TOKEN)
            }
            "augmented_assignment_expression" | "binary_expression" => {
                let op = node
                    .child_by_field_name("operator")
                    .map_or("", |op| op.kind());
                self.lower_binary(node, operator_kind(op))
            }
            "update_expression" => {
                let prefix = node.child(0).is_some_and(|first| !first.is_named());
                let kind = if prefix {
                    kind::PREFIX_UNARY_EXPRESSION
                } else {
                    kind::POSTFIX_UNARY_EXPRESSION
                };
                self.branch(kind, node, self.lower_children(node))
            }
            "unary_expression" => {
                let op = node
                    .child_by_field_name("operator")
                    .map_or("", |op| op.kind());
                let kind = match op {
                    "typeof" => "TypeOfExpression",
                    "void" => "VoidExpression",
                    "delete" => "DeleteExpression",
                    _ => kind::PREFIX_UNARY_EXPRESSION,
                };
                self.branch(kind, node, self.lower_children(node))
            }
            "optional_chain" => self.leaf("QuestionDotToken", node),

            "class_declaration" | "abstract_class_declaration" => {
                self.branch(kind::CLASS_DECLARATION, node, self.lower_children(node))
            }
            "class" => self.branch("ClassExpression", node, self.lower_children(node)),
            "extends_clause" | "implements_clause" | "extends_type_clause" => {
                self.lower_heritage(node)
            }
            "method_definition" => self.lower_method(node),
            "required_parameter" | "optional_parameter" => {
                self.branch(kind::PARAMETER, node, self.lower_children(node))
            }
            "public_field_definition" | "field_definition" => {
                self.branch(kind::PROPERTY_DECLARATION, node, self.lower_children(node))
            }
            "accessibility_modifier" => {
                let kind = match self.text(node) {
                    "private" => "PrivateKeyword",
                    "protected" => "ProtectedKeyword",
                    _ => "PublicKeyword",
                };
                self.leaf(kind, node)
            }

            "for_in_statement" => {
                let of = node
                    .child_by_field_name("operator")
                    .is_some_and(|op| op.kind() == "of");
                let kind = if of { "ForOfStatement" } else { "ForInStatement" };
                self.branch(kind, node, self.lower_children(node))
            }
            "ERROR" => self.branch(kind::UNKNOWN, node, self.lower_children(node)),

            other => {
                let kind = mapped_kind(other).map_or_else(|| pascal_case(other), str::to_owned);
                self.branch(&kind, node, self.lower_children(node))
            }
        }
    }

    /// `let a = 1, b;` becomes a statement wrapping a declaration list that
    /// ends with the last declarator (the `;` belongs to the statement).
    fn lower_variable_statement(&self, node: Node<'_>) -> AstNode {
        let declarations = self.lower_children(node);
        let list_end = declarations
            .last()
            .map_or(node.end_byte(), |d| d.span().end);
        let list_span = Span::new(node.start_byte(), list_end);
        let list_text = self.src.get(list_span.start..list_span.end).unwrap_or("");
        let list = AstNode::new(kind::VARIABLE_DECLARATION_LIST, list_text)
            .with_span(list_span)
            .with_children(declarations);
        self.branch(kind::VARIABLE_STATEMENT, node, vec![list])
    }

    fn lower_binary(&self, node: Node<'_>, operator: &str) -> AstNode {
        let mut children = Vec::with_capacity(3);
        if let Some(left) = node.child_by_field_name("left") {
            self.lower_into(left, &mut children);
        }
        match node.child_by_field_name("operator").or_else(|| {
            // assignment_expression has no operator field; `=` sits between operands.
            node.child_by_field_name("left").and_then(|l| l.next_sibling())
        }) {
            Some(op) => children.push(self.leaf(operator, op)),
            None => children.push(AstNode::new(operator, "")),
        }
        if let Some(right) = node.child_by_field_name("right") {
            self.lower_into(right, &mut children);
        }
        self.branch(kind::BINARY_EXPRESSION, node, children)
    }

    fn lower_template(&self, node: Node<'_>) -> AstNode {
        let mut substitutions = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "template_substitution" {
                substitutions.extend(self.lower_children(child));
            }
        }
        if substitutions.is_empty() {
            self.leaf(kind::NO_SUBSTITUTION_TEMPLATE_LITERAL, node)
        } else {
            self.branch(kind::TEMPLATE_EXPRESSION, node, substitutions)
        }
    }

    /// Each heritage clause wraps its operands in `ExpressionWithTypeArguments`.
    fn lower_heritage(&self, node: Node<'_>) -> AstNode {
        let operands = self
            .lower_children(node)
            .into_iter()
            .map(|operand| {
                let text = operand.text_owned();
                let span = operand.span();
                AstNode::new(kind::EXPRESSION_WITH_TYPE_ARGUMENTS, text)
                    .with_span(span)
                    .with_child(operand)
            })
            .collect();
        self.branch(kind::HERITAGE_CLAUSE, node, operands)
    }

    fn lower_method(&self, node: Node<'_>) -> AstNode {
        let is_constructor = node
            .child_by_field_name("name")
            .is_some_and(|name| self.text(name) == "constructor");
        if !is_constructor {
            return self.branch(kind::METHOD_DECLARATION, node, self.lower_children(node));
        }
        // A constructor has no name child.
        let mut children = self.lower_children(node);
        if children
            .first()
            .is_some_and(|c| c.is(kind::IDENTIFIER) && c.text().as_str() == "constructor")
        {
            children.remove(0);
        }
        self.branch(kind::CONSTRUCTOR, node, children)
    }
}

fn keyword_type(text: &str) -> &'static str {
    match text {
        "string" => kind::STRING_KEYWORD,
        "number" => kind::NUMBER_KEYWORD,
        "boolean" => kind::BOOLEAN_KEYWORD,
        "any" => kind::ANY_KEYWORD,
        "unknown" => kind::UNKNOWN_KEYWORD,
        "void" => kind::VOID_KEYWORD,
        "never" => kind::NEVER_KEYWORD,
        "object" => kind::OBJECT_KEYWORD,
        "symbol" => kind::SYMBOL_KEYWORD,
        "bigint" => kind::BIGINT_KEYWORD,
        "undefined" => kind::UNDEFINED_KEYWORD,
        _ => kind::TYPE_REFERENCE,
    }
}

fn operator_kind(op: &str) -> &'static str {
    match op {
        "=" => kind::EQUALS_TOKEN,
        "+=" => "PlusEqualsToken",
        "-=" => "MinusEqualsToken",
        "*=" => "AsteriskEqualsToken",
        "**=" => "AsteriskAsteriskEqualsToken",
        "/=" => "SlashEqualsToken",
        "%=" => "PercentEqualsToken",
        "<<=" => "LessThanLessThanEqualsToken",
        ">>=" => "GreaterThanGreaterThanEqualsToken",
        ">>>=" => "GreaterThanGreaterThanGreaterThanEqualsToken",
        "&=" => "AmpersandEqualsToken",
        "|=" => "BarEqualsToken",
        "^=" => "CaretEqualsToken",
        "&&=" => "AmpersandAmpersandEqualsToken",
        "||=" => "BarBarEqualsToken",
        "??=" => "QuestionQuestionEqualsToken",
        "+" => "PlusToken",
        "-" => "MinusToken",
        "*" => "AsteriskToken",
        "**" => "AsteriskAsteriskToken",
        "/" => "SlashToken",
        "%" => "PercentToken",
        "==" => "EqualsEqualsToken",
        "===" => "EqualsEqualsEqualsToken",
        "!=" => "ExclamationEqualsToken",
        "!==" => "ExclamationEqualsEqualsToken",
        "<" => "LessThanToken",
        ">" => "GreaterThanToken",
        "<=" => "LessThanEqualsToken",
        ">=" => "GreaterThanEqualsToken",
        "&&" => "AmpersandAmpersandToken",
        "||" => "BarBarToken",
        "??" => "QuestionQuestionToken",
        "&" => "AmpersandToken",
        "|" => "BarToken",
        "^" => "CaretToken",
        "<<" => "LessThanLessThanToken",
        ">>" => "GreaterThanGreaterThanToken",
        ">>>" => "GreaterThanGreaterThanGreaterThanToken",
        "instanceof" => "InstanceOfKeyword",
        "in" => "InKeyword",
        _ => kind::UNKNOWN,
    }
}

/// tree-sitter kinds whose TypeScript compiler name is not their PascalCase form.
fn mapped_kind(ts_kind: &str) -> Option<&'static str> {
    let mapped = match ts_kind {
        "statement_block" => kind::BLOCK,
        "call_expression" => kind::CALL_EXPRESSION,
        "member_expression" => kind::PROPERTY_ACCESS_EXPRESSION,
        "subscript_expression" => kind::ELEMENT_ACCESS_EXPRESSION,
        "new_expression" => kind::NEW_EXPRESSION,
        "ternary_expression" => "ConditionalExpression",
        "function_expression" | "function" => "FunctionExpression",
        "generator_function_declaration" => "FunctionDeclaration",
        "object" => "ObjectLiteralExpression",
        "array" => "ArrayLiteralExpression",
        "pair" => "PropertyAssignment",
        "object_pattern" => "ObjectBindingPattern",
        "array_pattern" => "ArrayBindingPattern",
        "import_statement" => "ImportDeclaration",
        "export_statement" => "ExportDeclaration",
        "catch_clause" => "CatchClause",
        "switch_case" => "CaseClause",
        "switch_default" => "DefaultClause",
        _ => return None,
    };
    Some(mapped)
}

/// `expression_statement` -> `ExpressionStatement`.
fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(pascal_case("expression_statement"), "ExpressionStatement");
        assert_eq!(pascal_case("return_statement"), "ReturnStatement");
        assert_eq!(pascal_case("arrow_function"), "ArrowFunction");
        assert_eq!(pascal_case("program"), "Program");
    }

    #[test]
    fn operators_map_to_token_kinds() {
        assert_eq!(operator_kind("="), kind::EQUALS_TOKEN);
        assert!(kind::is_assignment_operator(operator_kind("+=")));
        assert!(!kind::is_assignment_operator(operator_kind("===")));
        assert_eq!(operator_kind("@@"), kind::UNKNOWN);
    }

    #[test]
    fn keyword_types() {
        assert_eq!(keyword_type("string"), kind::STRING_KEYWORD);
        assert_eq!(keyword_type("number"), kind::NUMBER_KEYWORD);
    }
}
