//! Serializes concrete syntax to source text.

use std::fmt::Write;

use crate::concrete::{
    ConcreteNode, Expression, SourceFile, Statement, StringLiteral, VariableDeclaration,
    VariableDeclarationList,
};

/// Line terminator written after each statement of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewLine {
    /// `\n`
    #[default]
    LineFeed,
    /// `\r\n`
    CarriageReturnLineFeed,
}

impl NewLine {
    fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}

/// Prints concrete nodes as TypeScript.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    new_line: NewLine,
}

impl Printer {
    /// Creates a printer using `\n` line endings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_new_line(mut self, new_line: NewLine) -> Self {
        self.new_line = new_line;
        self
    }

    /// Prints a whole file, one terminated line per statement.
    #[must_use]
    pub fn print_file(&self, file: &SourceFile) -> String {
        let mut out = String::new();
        for statement in &file.statements {
            self.write_statement(&mut out, statement);
            out.push_str(self.new_line.as_str());
        }
        out
    }

    /// Prints a standalone node without a trailing line break.
    #[must_use]
    pub fn print_node(&self, node: &ConcreteNode) -> String {
        let mut out = String::new();
        match node {
            ConcreteNode::SourceFile(file) => return self.print_file(file),
            ConcreteNode::Statement(statement) => self.write_statement(&mut out, statement),
            ConcreteNode::Declaration(declaration) => {
                self.write_declaration(&mut out, declaration);
            }
            ConcreteNode::Type(ty) => out.push_str(ty.as_str()),
            ConcreteNode::Expression(expression) => self.write_expression(&mut out, expression),
        }
        out
    }

    fn write_statement(&self, out: &mut String, statement: &Statement) {
        match statement {
            Statement::Variable(list) => self.write_declaration_list(out, list),
            Statement::Expression(expression) => self.write_expression(out, expression),
        }
        out.push(';');
    }

    fn write_declaration_list(&self, out: &mut String, list: &VariableDeclarationList) {
        out.push_str(list.flags.keyword());
        out.push(' ');
        for (i, declaration) in list.declarations.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_declaration(out, declaration);
        }
    }

    fn write_declaration(&self, out: &mut String, declaration: &VariableDeclaration) {
        out.push_str(declaration.name.as_str());
        if let Some(ty) = declaration.ty {
            let _ = write!(out, ": {}", ty.as_str());
        }
        if let Some(initializer) = &declaration.initializer {
            out.push_str(" = ");
            self.write_expression(out, initializer);
        }
    }

    fn write_expression(&self, out: &mut String, expression: &Expression) {
        match expression {
            Expression::Identifier(identifier) => out.push_str(identifier.as_str()),
            Expression::StringLiteral(literal) => write_string_literal(out, literal),
            Expression::Assignment { left, right } => {
                self.write_expression(out, left);
                out.push_str(" = ");
                self.write_expression(out, right);
            }
            Expression::Call { callee, argument } => {
                self.write_expression(out, callee);
                out.push('(');
                if let Some(argument) = argument {
                    self.write_expression(out, argument);
                }
                out.push(')');
            }
            Expression::PropertyAccess { object, name } => {
                self.write_expression(out, object);
                out.push('.');
                out.push_str(name.as_str());
            }
        }
    }
}

/// Writes `literal` quoted and escaped for its quote style.
fn write_string_literal(out: &mut String, literal: &StringLiteral) {
    let quote = if literal.single_quote { '\'' } else { '"' };
    out.push(quote);
    let mut chars = literal.value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\0' if chars.peek().is_some_and(char::is_ascii_digit) => out.push_str("\\x00"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
