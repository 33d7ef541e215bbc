//! TypeScript parser producing the generic tree.

use std::path::{Path, PathBuf};

use astfix_core::AstNode;
use tree_sitter::{Language, Parser};

use crate::lower::Lowerer;

/// Errors raised while parsing TypeScript source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load TypeScript grammar: {message}")]
    Language {
        /// Message from tree-sitter.
        message: String,
    },

    /// tree-sitter returned no tree.
    #[error("failed to parse {}", file.display())]
    NoTree {
        /// File being parsed.
        file: PathBuf,
    },
}

/// Parses TypeScript (or TSX) source into an [`AstNode`] tree.
pub struct TypeScriptParser {
    language: Language,
}

impl TypeScriptParser {
    /// Creates a parser for plain TypeScript.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Creates a parser for TSX.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Picks the grammar matching the file extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx" | "jsx") => Self::tsx(),
            _ => Self::new(),
        }
    }

    /// File extensions this parser handles.
    #[must_use]
    pub fn extensions() -> &'static [&'static str] {
        &["ts", "tsx", "mts", "cts"]
    }

    /// Parses `source` into a `SourceFile` tree.
    ///
    /// Syntax errors do not fail the parse; they surface as `Unknown`
    /// nodes and a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or tree-sitter
    /// gives up on the input.
    pub fn parse(&self, source: &str, file: &Path) -> Result<AstNode, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language {
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                file: file.to_path_buf(),
            })?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::warn!(file = %file.display(), "source contains syntax errors");
        }

        Ok(Lowerer::new(source).lower_program(root))
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astfix_core::kind;

    fn parse(src: &str) -> AstNode {
        TypeScriptParser::new()
            .parse(src, Path::new("test.ts"))
            .unwrap()
    }

    fn kinds(node: &AstNode) -> Vec<String> {
        node.children().iter().map(|c| c.kind().to_owned()).collect()
    }

    #[test]
    fn source_file_ends_with_eof_token() {
        let root = parse("let a = 1;\n");
        assert!(root.is(kind::SOURCE_FILE));
        assert_eq!(
            kinds(&root),
            vec![kind::VARIABLE_STATEMENT, kind::END_OF_FILE_TOKEN]
        );
        assert_eq!(root.children()[1].text().as_str(), "");
    }

    #[test]
    fn empty_source() {
        let root = parse("");
        assert_eq!(kinds(&root), vec![kind::END_OF_FILE_TOKEN]);
    }

    #[test]
    fn variable_statement_shape() {
        let root = parse("let greeting: string = \"Hello, World\";");
        let stmt = &root.children()[0];
        assert_eq!(stmt.text().as_str(), "let greeting: string = \"Hello, World\";");

        let list = &stmt.children()[0];
        assert!(list.is(kind::VARIABLE_DECLARATION_LIST));
        assert_eq!(list.text().as_str(), "let greeting: string = \"Hello, World\"");

        let decl = &list.children()[0];
        assert!(decl.is(kind::VARIABLE_DECLARATION));
        assert_eq!(
            kinds(decl),
            vec![kind::IDENTIFIER, kind::STRING_KEYWORD, kind::STRING_LITERAL]
        );
        assert_eq!(decl.children()[2].text().as_str(), "\"Hello, World\"");
    }

    #[test]
    fn multiple_declarators() {
        let root = parse("let a = 1, b;");
        let list = &root.children()[0].children()[0];
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.children()[1].children()[0].text().as_str(), "b");
    }

    #[test]
    fn assignment_lowers_to_binary_expression() {
        let root = parse("x = 2;\ny += 1;");
        let assign = &root.children()[0].children()[0];
        assert!(assign.is(kind::BINARY_EXPRESSION));
        assert_eq!(
            kinds(assign),
            vec![kind::IDENTIFIER, kind::EQUALS_TOKEN, kind::NUMERIC_LITERAL]
        );

        let augmented = &root.children()[1].children()[0];
        assert_eq!(augmented.children()[1].kind(), "PlusEqualsToken");
        assert_eq!(augmented.children()[1].text().as_str(), "+=");
    }

    #[test]
    fn update_expressions() {
        let root = parse("x++;\n--y;");
        assert!(root.children()[0].children()[0].is(kind::POSTFIX_UNARY_EXPRESSION));
        assert!(root.children()[1].children()[0].is(kind::PREFIX_UNARY_EXPRESSION));
    }

    #[test]
    fn class_with_heritage_and_constructor() {
        let root = parse(
            "class Dog extends Animal {\n    constructor(name: string) {\n        super(name);\n    }\n}\n",
        );
        let class = &root.children()[0];
        assert!(class.is(kind::CLASS_DECLARATION));
        assert_eq!(
            kinds(class),
            vec![kind::IDENTIFIER, kind::HERITAGE_CLAUSE, kind::CONSTRUCTOR]
        );
        assert_eq!(class.children()[0].text().as_str(), "Dog");

        let heritage = &class.children()[1];
        assert!(heritage.children()[0].is(kind::EXPRESSION_WITH_TYPE_ARGUMENTS));

        let ctor = &class.children()[2];
        assert_eq!(kinds(ctor), vec![kind::PARAMETER, kind::BLOCK]);

        let call = &ctor.children()[1].children()[0].children()[0];
        assert!(call.is(kind::CALL_EXPRESSION));
        assert!(call.children()[0].is(kind::SUPER_KEYWORD));
    }

    #[test]
    fn methods_are_not_constructors() {
        let root = parse("class A { run() {} }");
        let class = &root.children()[0];
        assert!(class.children()[1].is(kind::METHOD_DECLARATION));
    }

    #[test]
    fn type_references() {
        let root = parse("let d: Dog = make();");
        let decl = &root.children()[0].children()[0].children()[0];
        let ty = &decl.children()[1];
        assert!(ty.is(kind::TYPE_REFERENCE));
        assert_eq!(ty.children()[0].text().as_str(), "Dog");
    }

    #[test]
    fn comments_are_dropped() {
        let root = parse("// note\nlet a = 1; /* trailing */");
        assert_eq!(
            kinds(&root),
            vec![kind::VARIABLE_STATEMENT, kind::END_OF_FILE_TOKEN]
        );
    }

    #[test]
    fn syntax_errors_become_unknown_nodes() {
        let root = parse("let a = 1; ))) }");
        assert!(root.walk().any(|n| n.is(kind::UNKNOWN)));
        assert_eq!(root.children()[0].kind(), kind::VARIABLE_STATEMENT);
        assert_eq!(
            root.children().last().map(AstNode::kind),
            Some(kind::END_OF_FILE_TOKEN)
        );
    }

    #[test]
    fn comments_next_to_errors_are_still_dropped() {
        let root = parse("// note\nlet a = 1; ))) }");
        assert!(root.walk().any(|n| n.is(kind::UNKNOWN)));
        assert!(!root.walk().any(|n| n.is("Comment")));
    }

    #[test]
    fn spans_cover_source() {
        let src = "let a = 1;\nlet b = 2;";
        let root = parse(src);
        let second = &root.children()[1];
        assert_eq!(second.span().start, 11);
        assert_eq!(&src[second.span().start..second.span().end], "let b = 2;");
    }

    #[test]
    fn for_path_selects_grammar() {
        let root = TypeScriptParser::for_path(Path::new("view.tsx"))
            .parse("const a = <div/>;", Path::new("view.tsx"))
            .unwrap();
        assert!(!root.walk().any(|n| n.is(kind::UNKNOWN)));
        assert!(TypeScriptParser::extensions().contains(&"ts"));
    }
}
