//! Concrete TypeScript syntax the reconstructor targets.
//!
//! Only the constructs the generic tree can currently be mapped onto are
//! modelled. Constructors are named after the TypeScript compiler's
//! `factory.create*` functions they stand in for.

/// Any node the reconstructor can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcreteNode {
    /// Whole file.
    SourceFile(SourceFile),
    /// A statement.
    Statement(Statement),
    /// One binding of a declaration list.
    Declaration(VariableDeclaration),
    /// A type annotation.
    Type(TypeNode),
    /// An expression.
    Expression(Expression),
}

impl ConcreteNode {
    /// Short name of the construct, for error messages.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::SourceFile(_) => "source file",
            Self::Statement(_) => "statement",
            Self::Declaration(_) => "variable declaration",
            Self::Type(_) => "type",
            Self::Expression(_) => "expression",
        }
    }
}

/// A file made of top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl SourceFile {
    /// `factory.createSourceFile`.
    #[must_use]
    pub fn create(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let a = 1;`
    Variable(VariableDeclarationList),
    /// `expr;`
    Expression(Expression),
}

impl Statement {
    /// `factory.createVariableStatement`.
    #[must_use]
    pub fn create_variable(list: VariableDeclarationList) -> Self {
        Self::Variable(list)
    }

    /// `factory.createExpressionStatement`.
    #[must_use]
    pub fn create_expression(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

/// Binding keyword of a declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFlags {
    /// `let`
    Let,
    /// `const`
    Const,
    /// `var`
    Var,
}

impl DeclarationFlags {
    /// Source keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Const => "const",
            Self::Var => "var",
        }
    }
}

/// `let a = 1, b = 2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationList {
    /// Bindings in source order.
    pub declarations: Vec<VariableDeclaration>,
    /// `let` or `const`.
    pub flags: DeclarationFlags,
}

impl VariableDeclarationList {
    /// `factory.createVariableDeclarationList`.
    #[must_use]
    pub fn create(declarations: Vec<VariableDeclaration>, flags: DeclarationFlags) -> Self {
        Self {
            declarations,
            flags,
        }
    }
}

/// `name: type = initializer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// Bound name.
    pub name: Identifier,
    /// Optional type annotation.
    pub ty: Option<TypeNode>,
    /// Optional initializer.
    pub initializer: Option<Expression>,
}

impl VariableDeclaration {
    /// `factory.createVariableDeclaration`.
    #[must_use]
    pub fn create(name: Identifier, ty: Option<TypeNode>, initializer: Option<Expression>) -> Self {
        Self {
            name,
            ty,
            initializer,
        }
    }
}

/// Type annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeNode {
    /// `string`
    String,
}

impl TypeNode {
    /// Source text of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(pub String);

impl Identifier {
    /// `factory.createIdentifier`.
    #[must_use]
    pub fn create(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A string literal, stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Literal value with escape sequences resolved.
    pub value: String,
    /// Print with `'` rather than `"`.
    pub single_quote: bool,
}

impl StringLiteral {
    /// `factory.createStringLiteral`.
    #[must_use]
    pub fn create(value: impl Into<String>, single_quote: bool) -> Self {
        Self {
            value: value.into(),
            single_quote,
        }
    }

    /// Builds a literal from quoted source text such as `'it\'s'`.
    ///
    /// The quote style follows the opening delimiter. Returns `None` when
    /// the text is not delimited by matching quotes.
    #[must_use]
    pub fn from_source(text: &str) -> Option<Self> {
        let text = text.trim();
        let quote = text.chars().next().filter(|c| *c == '\'' || *c == '"')?;
        let body = text
            .get(1..)
            .and_then(|rest| rest.strip_suffix(quote))?;
        Some(Self::create(unescape(body), quote == '\''))
    }
}

/// Expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `name`
    Identifier(Identifier),
    /// `'text'`
    StringLiteral(StringLiteral),
    /// `left = right`
    Assignment {
        /// Assigned target.
        left: Box<Expression>,
        /// Assigned value.
        right: Box<Expression>,
    },
    /// `callee(argument)`
    Call {
        /// Called expression.
        callee: Box<Expression>,
        /// The single argument, if any.
        argument: Option<Box<Expression>>,
    },
    /// `object.name`
    PropertyAccess {
        /// Accessed object.
        object: Box<Expression>,
        /// Property name.
        name: Identifier,
    },
}

impl Expression {
    /// `factory.createBinaryExpression(left, EqualsToken, right)`.
    #[must_use]
    pub fn create_assignment(left: Expression, right: Expression) -> Self {
        Self::Assignment {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `factory.createCallExpression` with at most one argument.
    #[must_use]
    pub fn create_call(callee: Expression, argument: Option<Expression>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            argument: argument.map(Box::new),
        }
    }

    /// `factory.createPropertyAccessExpression`.
    #[must_use]
    pub fn create_property_access(object: Expression, name: Identifier) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            name,
        }
    }
}

/// Resolves the escape sequences of a string literal body.
///
/// Unknown escapes resolve to the escaped character itself, and a
/// backslash before a line break continues the line.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            'x' => push_code_point(&mut out, &mut chars, 2, "\\x"),
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\u{");
                        out.push_str(&hex);
                        out.push('}');
                    }
                }
            }
            'u' => push_code_point(&mut out, &mut chars, 4, "\\u"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }
    out
}

fn push_code_point(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
    prefix: &str,
) {
    let hex: String = chars.by_ref().take(digits).collect();
    let decoded = (hex.len() == digits)
        .then(|| u32::from_str_radix(&hex, 16).ok())
        .flatten()
        .and_then(char::from_u32);
    match decoded {
        Some(ch) => out.push(ch),
        None => {
            out.push_str(prefix);
            out.push_str(&hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_from_single_quoted_source() {
        let lit = StringLiteral::from_source("'it\\'s'").unwrap();
        assert_eq!(lit.value, "it's");
        assert!(lit.single_quote);
    }

    #[test]
    fn literal_from_double_quoted_source() {
        let lit = StringLiteral::from_source("\"Hello, World\"").unwrap();
        assert_eq!(lit.value, "Hello, World");
        assert!(!lit.single_quote);
    }

    #[test]
    fn literal_rejects_mismatched_quotes() {
        assert!(StringLiteral::from_source("'x\"").is_none());
        assert!(StringLiteral::from_source("'").is_none());
        assert!(StringLiteral::from_source("x").is_none());
    }

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(unescape(r#"\"q\" \\ \'"#), "\"q\" \\ '");
        assert_eq!(unescape(r"\x41B\u{1F600}"), "AB\u{1F600}");
        assert_eq!(unescape(r"\0"), "\0");
        assert_eq!(unescape("line\\\ncontinued"), "linecontinued");
        assert_eq!(unescape(r"\q"), "q");
    }

    #[test]
    fn unescape_keeps_malformed_escapes() {
        assert_eq!(unescape(r"\xZ"), r"\xZ");
        assert_eq!(unescape("end\\"), "end\\");
    }

    #[test]
    fn describe_names() {
        let node = ConcreteNode::Type(TypeNode::String);
        assert_eq!(node.describe(), "type");
    }
}
