//! AST command implementation.

use anyhow::{Context, Result};
use astfix_core::{node_line, AstNode};
use astfix_ts::TypeScriptParser;
use std::path::Path;

/// Characters of node text shown per outline line.
const OUTLINE_TEXT_LIMIT: usize = 20;

/// Runs the ast command.
pub fn run(file: &Path, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let root = TypeScriptParser::for_path(file)
        .parse(&source, file)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        for line in outline(&root) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One indented line per node, parents before children.
pub fn outline(root: &AstNode) -> Vec<String> {
    fn visit(node: &AstNode, depth: usize, lines: &mut Vec<String>) {
        lines.push(node_line(node, depth, Some(OUTLINE_TEXT_LIMIT)));
        for child in node.children() {
            visit(child, depth + 1, lines);
        }
    }

    let mut lines = Vec::with_capacity(root.node_count());
    visit(root, 0, &mut lines);
    lines
}
