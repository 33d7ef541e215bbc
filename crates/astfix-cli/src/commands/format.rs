//! Format command implementation.

use anyhow::{Context, Result};
use astfix_codegen::Reconstructor;
use astfix_core::{Config, TracingSink};
use astfix_rules::Fixer;
use astfix_ts::TypeScriptParser;
use std::path::Path;

use super::{emit, load_config, project_dir, Settings};

/// Runs the format command.
pub fn run(file: &Path, out: Option<&Path>, settings: &Settings) -> Result<()> {
    let config = load_config(&project_dir(file), settings)?;
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let formatted = format_source(&source, file, &config)?;
    emit(&formatted, out, "Formatted source:")
}

/// Parses `source`, applies the enabled fix rules and regenerates it.
///
/// Nothing is returned when regeneration fails, so a caller never writes
/// a partial file.
pub fn format_source(source: &str, file: &Path, config: &Config) -> Result<String> {
    let root = TypeScriptParser::for_path(file)
        .parse(source, file)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let mut sink = TracingSink;
    let mut fixer = Fixer::new(config, &mut sink);
    fixer.fix(&root, 0, &root);
    tracing::debug!("Applied {} fixes to {}", fixer.applied(), file.display());

    let mut sink = TracingSink;
    Reconstructor::new(config.verbosity, &mut sink)
        .render(&root)
        .with_context(|| format!("Failed to regenerate {}", file.display()))
}
