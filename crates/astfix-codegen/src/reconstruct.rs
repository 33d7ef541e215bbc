//! Maps generic nodes onto concrete syntax.

use astfix_core::{kind, node_line, AstNode, LogSink, TracingSink, Verbosity};

use crate::concrete::{
    ConcreteNode, DeclarationFlags, Expression, Identifier, SourceFile, Statement, StringLiteral,
    TypeNode, VariableDeclaration, VariableDeclarationList,
};
use crate::error::RenderError;
use crate::printer::Printer;

/// Rebuilds source text from a generic tree.
///
/// Each kind maps onto one concrete construct. Kinds with no mapping, and
/// kinds absorbed by their parent (the end-of-file marker, operator
/// tokens), build to nothing and are dropped by the caller.
pub struct Reconstructor<'a> {
    verbosity: Verbosity,
    sink: &'a mut dyn LogSink,
    printer: Printer,
}

impl<'a> Reconstructor<'a> {
    /// Creates a reconstructor logging visited nodes to `sink` when
    /// `verbosity` is debug.
    #[must_use]
    pub fn new(verbosity: Verbosity, sink: &'a mut dyn LogSink) -> Self {
        Self {
            verbosity,
            sink,
            printer: Printer::new(),
        }
    }

    /// Replaces the printer.
    #[must_use]
    pub fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Builds and prints `root`.
    ///
    /// A `SourceFile` root is printed as a file; anything else as a
    /// standalone node. A root that builds to nothing renders as `""`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError`] met while building; no text is
    /// produced in that case.
    pub fn render(&mut self, root: &AstNode) -> Result<String, RenderError> {
        Ok(match self.build(root, 0)? {
            Some(ConcreteNode::SourceFile(file)) => self.printer.print_file(&file),
            Some(node) => self.printer.print_node(&node),
            None => String::new(),
        })
    }

    /// Builds the concrete construct for `node`, or `None` for kinds that
    /// have none.
    ///
    /// # Errors
    ///
    /// Fails on unsupported type or literal kinds and on malformed children.
    pub fn build(
        &mut self,
        node: &AstNode,
        depth: usize,
    ) -> Result<Option<ConcreteNode>, RenderError> {
        self.trace(node, depth);

        let built = match kind::canonical(node.kind()) {
            kind::SOURCE_FILE => ConcreteNode::SourceFile(self.source_file(node, depth)?),
            kind::VARIABLE_STATEMENT => {
                return match node.child(kind::VARIABLE_DECLARATION_LIST) {
                    Some(list) => self.build(list, depth + 1),
                    None => Ok(None),
                };
            }
            kind::VARIABLE_DECLARATION_LIST => {
                ConcreteNode::Statement(Statement::create_variable(self.declaration_list(node, depth)?))
            }
            kind::VARIABLE_DECLARATION => ConcreteNode::Declaration(self.declaration(node, depth)?),
            kind::IDENTIFIER => {
                ConcreteNode::Expression(Expression::Identifier(Identifier::create(node.text_owned())))
            }
            kind::STRING_KEYWORD => ConcreteNode::Type(to_type(node)?),
            kind::STRING_LITERAL => {
                ConcreteNode::Expression(Expression::StringLiteral(to_literal(node)?))
            }
            kind::EXPRESSION_STATEMENT => {
                let Some(child) = node.children().first() else {
                    return Ok(None);
                };
                match self.build(child, depth + 1)? {
                    Some(ConcreteNode::Expression(expression)) => {
                        ConcreteNode::Statement(Statement::create_expression(expression))
                    }
                    Some(_) => return Err(unexpected(node, "expression", child)),
                    None => return Ok(None),
                }
            }
            kind::BINARY_EXPRESSION => {
                if let Some(operator) = node.children().get(1) {
                    if kind::canonical(operator.kind()) != kind::EQUALS_TOKEN {
                        return Err(unexpected(node, "`=` operator", operator));
                    }
                }
                let left = self.expression(node, 0, "left operand", depth)?;
                let right = self.expression(node, 2, "right operand", depth)?;
                ConcreteNode::Expression(Expression::create_assignment(left, right))
            }
            kind::CALL_EXPRESSION => {
                let callee = self.expression(node, 0, "callee", depth)?;
                let argument = if node.children().len() > 1 {
                    Some(self.expression(node, 1, "argument", depth)?)
                } else {
                    None
                };
                ConcreteNode::Expression(Expression::create_call(callee, argument))
            }
            kind::PROPERTY_ACCESS_EXPRESSION => {
                let object = self.expression(node, 0, "object", depth)?;
                let name = match self.expression(node, 1, "property name", depth)? {
                    Expression::Identifier(name) => name,
                    _ => return Err(unexpected(node, "identifier", &node.children()[1])),
                };
                ConcreteNode::Expression(Expression::create_property_access(object, name))
            }
            other if kind::is_literal(other) => {
                ConcreteNode::Expression(Expression::StringLiteral(to_literal(node)?))
            }
            _ => return Ok(None),
        };
        Ok(Some(built))
    }

    /// Top-level statements, with variable statement wrappers flattened.
    fn source_file(&mut self, node: &AstNode, depth: usize) -> Result<SourceFile, RenderError> {
        let mut statements = Vec::new();
        for child in node.children() {
            if kind::canonical(child.kind()) == kind::VARIABLE_STATEMENT {
                for inner in child.children() {
                    if let Some(ConcreteNode::Statement(s)) = self.build(inner, depth + 2)? {
                        statements.push(s);
                    }
                }
            } else if let Some(ConcreteNode::Statement(s)) = self.build(child, depth + 1)? {
                statements.push(s);
            }
        }
        Ok(SourceFile::create(statements))
    }

    fn declaration_list(
        &mut self,
        node: &AstNode,
        depth: usize,
    ) -> Result<VariableDeclarationList, RenderError> {
        let mut declarations = Vec::new();
        for child in node.children() {
            if let Some(ConcreteNode::Declaration(d)) = self.build(child, depth + 1)? {
                declarations.push(d);
            }
        }
        Ok(VariableDeclarationList::create(
            declarations,
            binding_flags(&node.text()),
        ))
    }

    /// `[identifier, type?, initializer?]`; a lone second child is a type
    /// when its kind is a type kind.
    fn declaration(
        &mut self,
        node: &AstNode,
        depth: usize,
    ) -> Result<VariableDeclaration, RenderError> {
        let (name, rest) = node
            .children()
            .split_first()
            .ok_or_else(|| missing(node, "identifier"))?;
        if kind::canonical(name.kind()) != kind::IDENTIFIER {
            return Err(unexpected(node, "identifier", name));
        }
        self.trace(name, depth + 1);

        let (ty, initializer) = match rest {
            [] => (None, None),
            [only] if kind::is_type(only.kind()) => (Some(only), None),
            [only] => (None, Some(only)),
            [ty, initializer, ..] => (Some(ty), Some(initializer)),
        };
        let ty = ty
            .map(|t| {
                self.trace(t, depth + 1);
                to_type(t)
            })
            .transpose()?;
        let initializer = initializer
            .map(|i| {
                self.trace(i, depth + 1);
                to_literal(i).map(Expression::StringLiteral)
            })
            .transpose()?;

        Ok(VariableDeclaration::create(
            Identifier::create(name.text_owned()),
            ty,
            initializer,
        ))
    }

    /// Builds the child at `index`, which must be an expression.
    fn expression(
        &mut self,
        parent: &AstNode,
        index: usize,
        role: &'static str,
        depth: usize,
    ) -> Result<Expression, RenderError> {
        let child = parent
            .children()
            .get(index)
            .ok_or_else(|| missing(parent, role))?;
        match self.build(child, depth + 1)? {
            Some(ConcreteNode::Expression(expression)) => Ok(expression),
            Some(_) => Err(unexpected(parent, "expression", child)),
            None => Err(missing(parent, role)),
        }
    }

    fn trace(&mut self, node: &AstNode, depth: usize) {
        if self.verbosity.is_debug() {
            self.sink.debug(&node_line(node, depth, None));
        }
    }
}

/// Renders `root` to source text, logging through `tracing`.
///
/// # Errors
///
/// See [`Reconstructor::render`].
pub fn render(root: &AstNode) -> Result<String, RenderError> {
    Reconstructor::new(Verbosity::Normal, &mut TracingSink).render(root)
}

fn binding_flags(text: &str) -> DeclarationFlags {
    let rest = text.trim_start();
    let keyword_end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(rest.len());
    match &rest[..keyword_end] {
        "let" => DeclarationFlags::Let,
        "var" => DeclarationFlags::Var,
        _ => DeclarationFlags::Const,
    }
}

fn to_type(node: &AstNode) -> Result<TypeNode, RenderError> {
    match kind::canonical(node.kind()) {
        kind::STRING_KEYWORD => Ok(TypeNode::String),
        other => Err(RenderError::UnsupportedType {
            kind: other.to_string(),
        }),
    }
}

fn to_literal(node: &AstNode) -> Result<StringLiteral, RenderError> {
    let unsupported = || RenderError::UnsupportedLiteral {
        kind: node.kind().to_string(),
    };
    match kind::canonical(node.kind()) {
        kind::STRING_LITERAL => StringLiteral::from_source(&node.text()).ok_or_else(unsupported),
        _ => Err(unsupported()),
    }
}

fn missing(parent: &AstNode, role: &'static str) -> RenderError {
    RenderError::MissingChild {
        parent: parent.kind().to_string(),
        role,
    }
}

fn unexpected(parent: &AstNode, expected: &'static str, found: &AstNode) -> RenderError {
    RenderError::UnexpectedNode {
        parent: parent.kind().to_string(),
        expected,
        found: found.kind().to_string(),
    }
}
