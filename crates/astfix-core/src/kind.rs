//! Kind labels of the generic tree.
//!
//! The vocabulary follows the TypeScript compiler's `SyntaxKind` names so
//! that trees dumped by other TypeScript tooling read the same way. The set
//! is open: parsers may emit kinds that are not listed here, and each
//! pipeline stage only dispatches on the kinds it understands.

/// Root node covering a whole source file.
pub const SOURCE_FILE: &str = "SourceFile";
/// Zero-width marker closing a [`SOURCE_FILE`].
pub const END_OF_FILE_TOKEN: &str = "EndOfFileToken";

/// Statement grouping a single [`VARIABLE_DECLARATION_LIST`].
pub const VARIABLE_STATEMENT: &str = "VariableStatement";
/// `let a = 1, b = 2` without the terminating semicolon.
pub const VARIABLE_DECLARATION_LIST: &str = "VariableDeclarationList";
/// A single `name: type = initializer` binding.
pub const VARIABLE_DECLARATION: &str = "VariableDeclaration";

/// Plain identifier.
pub const IDENTIFIER: &str = "Identifier";
/// `#private` member name.
pub const PRIVATE_IDENTIFIER: &str = "PrivateIdentifier";

/// `string` type keyword.
pub const STRING_KEYWORD: &str = "StringKeyword";
/// `number` type keyword.
pub const NUMBER_KEYWORD: &str = "NumberKeyword";
/// `boolean` type keyword.
pub const BOOLEAN_KEYWORD: &str = "BooleanKeyword";
/// `any` type keyword.
pub const ANY_KEYWORD: &str = "AnyKeyword";
/// `unknown` type keyword.
pub const UNKNOWN_KEYWORD: &str = "UnknownKeyword";
/// `void` type keyword.
pub const VOID_KEYWORD: &str = "VoidKeyword";
/// `never` type keyword.
pub const NEVER_KEYWORD: &str = "NeverKeyword";
/// `object` type keyword.
pub const OBJECT_KEYWORD: &str = "ObjectKeyword";
/// `symbol` type keyword.
pub const SYMBOL_KEYWORD: &str = "SymbolKeyword";
/// `bigint` type keyword.
pub const BIGINT_KEYWORD: &str = "BigIntKeyword";
/// `undefined` type keyword.
pub const UNDEFINED_KEYWORD: &str = "UndefinedKeyword";
/// Named type such as `Animal` or `Array<string>`.
pub const TYPE_REFERENCE: &str = "TypeReference";

/// Quoted string literal.
pub const STRING_LITERAL: &str = "StringLiteral";
/// Numeric literal.
pub const NUMERIC_LITERAL: &str = "NumericLiteral";
/// Template literal without substitutions.
pub const NO_SUBSTITUTION_TEMPLATE_LITERAL: &str = "NoSubstitutionTemplateLiteral";
/// Template literal with `${}` substitutions.
pub const TEMPLATE_EXPRESSION: &str = "TemplateExpression";
/// `/regex/` literal.
pub const REGULAR_EXPRESSION_LITERAL: &str = "RegularExpressionLiteral";
/// `true`.
pub const TRUE_KEYWORD: &str = "TrueKeyword";
/// `false`.
pub const FALSE_KEYWORD: &str = "FalseKeyword";
/// `null`.
pub const NULL_KEYWORD: &str = "NullKeyword";
/// `this`.
pub const THIS_KEYWORD: &str = "ThisKeyword";
/// `super`.
pub const SUPER_KEYWORD: &str = "SuperKeyword";

/// Statement consisting of a single expression.
pub const EXPRESSION_STATEMENT: &str = "ExpressionStatement";
/// Binary or assignment expression `[left, operator, right]`.
pub const BINARY_EXPRESSION: &str = "BinaryExpression";
/// `=` operator inside a [`BINARY_EXPRESSION`].
pub const EQUALS_TOKEN: &str = "EqualsToken";
/// Function or method call `[callee, args…]`.
pub const CALL_EXPRESSION: &str = "CallExpression";
/// `object.property`.
pub const PROPERTY_ACCESS_EXPRESSION: &str = "PropertyAccessExpression";
/// `object[index]`.
pub const ELEMENT_ACCESS_EXPRESSION: &str = "ElementAccessExpression";
/// `new Callee(args…)`.
pub const NEW_EXPRESSION: &str = "NewExpression";
/// `(expression)`.
pub const PARENTHESIZED_EXPRESSION: &str = "ParenthesizedExpression";
/// `++x`, `-x`, `!x`.
pub const PREFIX_UNARY_EXPRESSION: &str = "PrefixUnaryExpression";
/// `x++`, `x--`.
pub const POSTFIX_UNARY_EXPRESSION: &str = "PostfixUnaryExpression";

/// `class Name … { … }`.
pub const CLASS_DECLARATION: &str = "ClassDeclaration";
/// `extends Base` or `implements Contract`.
pub const HERITAGE_CLAUSE: &str = "HeritageClause";
/// Expression inside a [`HERITAGE_CLAUSE`].
pub const EXPRESSION_WITH_TYPE_ARGUMENTS: &str = "ExpressionWithTypeArguments";
/// `constructor(…) { … }`.
pub const CONSTRUCTOR: &str = "Constructor";
/// Class method.
pub const METHOD_DECLARATION: &str = "MethodDeclaration";
/// Class field.
pub const PROPERTY_DECLARATION: &str = "PropertyDeclaration";
/// Function or constructor parameter.
pub const PARAMETER: &str = "Parameter";
/// `{ statements… }`.
pub const BLOCK: &str = "Block";

/// Kind given to unparsable source regions.
pub const UNKNOWN: &str = "Unknown";

/// Returns true for operator token kinds that assign to their left operand.
#[must_use]
pub fn is_assignment_operator(kind: &str) -> bool {
    matches!(
        kind,
        EQUALS_TOKEN
            | "PlusEqualsToken"
            | "MinusEqualsToken"
            | "AsteriskEqualsToken"
            | "AsteriskAsteriskEqualsToken"
            | "SlashEqualsToken"
            | "PercentEqualsToken"
            | "LessThanLessThanEqualsToken"
            | "GreaterThanGreaterThanEqualsToken"
            | "GreaterThanGreaterThanGreaterThanEqualsToken"
            | "AmpersandEqualsToken"
            | "BarEqualsToken"
            | "CaretEqualsToken"
            | "AmpersandAmpersandEqualsToken"
            | "BarBarEqualsToken"
            | "QuestionQuestionEqualsToken"
            | "FirstAssignment"
            | "FirstCompoundAssignment"
            | "LastCompoundAssignment"
    )
}

/// Returns true for literal kinds (values written directly in source).
#[must_use]
pub fn is_literal(kind: &str) -> bool {
    matches!(
        kind,
        STRING_LITERAL
            | NUMERIC_LITERAL
            | "BigIntLiteral"
            | NO_SUBSTITUTION_TEMPLATE_LITERAL
            | TEMPLATE_EXPRESSION
            | REGULAR_EXPRESSION_LITERAL
            | TRUE_KEYWORD
            | FALSE_KEYWORD
            | NULL_KEYWORD
    )
}

/// Returns true for type nodes (keyword types and references).
#[must_use]
pub fn is_type(kind: &str) -> bool {
    matches!(
        kind,
        STRING_KEYWORD
            | NUMBER_KEYWORD
            | BOOLEAN_KEYWORD
            | ANY_KEYWORD
            | UNKNOWN_KEYWORD
            | VOID_KEYWORD
            | NEVER_KEYWORD
            | OBJECT_KEYWORD
            | SYMBOL_KEYWORD
            | BIGINT_KEYWORD
            | UNDEFINED_KEYWORD
            | TYPE_REFERENCE
            | "ArrayType"
            | "UnionType"
            | "IntersectionType"
            | "FunctionType"
            | "TypeLiteral"
            | "LiteralType"
            | "TupleType"
    )
}

/// Maps alias names to the kind constants above.
///
/// `ts.SyntaxKind[kind]` reports the first enum member sharing a value, so
/// trees dumped by the TypeScript compiler API label variable statements
/// `FirstStatement` and `=` tokens `FirstAssignment`.
#[must_use]
pub fn canonical(kind: &str) -> &str {
    match kind {
        "FirstStatement" => VARIABLE_STATEMENT,
        "FirstAssignment" => EQUALS_TOKEN,
        "FirstLiteralToken" => NUMERIC_LITERAL,
        "FirstTemplateToken" => NO_SUBSTITUTION_TEMPLATE_LITERAL,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_operators() {
        assert!(is_assignment_operator(EQUALS_TOKEN));
        assert!(is_assignment_operator("PlusEqualsToken"));
        assert!(!is_assignment_operator("EqualsEqualsEqualsToken"));
        assert!(!is_assignment_operator("PlusToken"));
    }

    #[test]
    fn literal_and_type_sets_are_disjoint() {
        for kind in [STRING_LITERAL, NUMERIC_LITERAL, TRUE_KEYWORD, NULL_KEYWORD] {
            assert!(is_literal(kind));
            assert!(!is_type(kind));
        }
        assert!(is_type(STRING_KEYWORD));
        assert!(!is_literal(STRING_KEYWORD));
    }

    #[test]
    fn canonical_resolves_aliases() {
        assert_eq!(canonical("FirstStatement"), VARIABLE_STATEMENT);
        assert_eq!(canonical("FirstAssignment"), EQUALS_TOKEN);
        assert_eq!(canonical(IDENTIFIER), IDENTIFIER);
    }
}
