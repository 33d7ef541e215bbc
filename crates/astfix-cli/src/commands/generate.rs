//! Generate command implementation.

use anyhow::{Context, Result};
use astfix_codegen::Reconstructor;
use astfix_core::{AstNode, TracingSink, Verbosity};
use std::path::Path;

use super::{emit, Settings};

/// Runs the generate command.
pub fn run(ast: &Path, out: Option<&Path>, settings: &Settings) -> Result<()> {
    let json = std::fs::read_to_string(ast)
        .with_context(|| format!("Failed to read {}", ast.display()))?;

    let source = generate_source(&json, settings.verbosity(Verbosity::Normal))
        .with_context(|| format!("Failed to generate code from {}", ast.display()))?;
    emit(&source, out, "Generated source:")
}

/// Rebuilds source text from a JSON-serialized tree.
pub fn generate_source(json: &str, verbosity: Verbosity) -> Result<String> {
    let root: AstNode = serde_json::from_str(json).context("Invalid tree JSON")?;
    let mut sink = TracingSink;
    Ok(Reconstructor::new(verbosity, &mut sink).render(&root)?)
}
