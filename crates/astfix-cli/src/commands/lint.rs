//! Lint command implementation.

use anyhow::{Context, Result};
use astfix_core::{Config, FileContext, LintResult, TracingSink};
use astfix_rules::Checker;
use astfix_ts::TypeScriptParser;
use std::path::{Path, PathBuf};

use super::{load_config, project_dir, Settings};
use crate::OutputFormat;

/// Patterns skipped even when not listed with `--exclude`.
const DEFAULT_EXCLUDES: &[&str] = &["**/node_modules/**", "**/*.d.ts"];

/// A checked file and its contents, kept for source excerpts.
pub struct SourceFile {
    /// Path relative to the analyzed root.
    pub relative: PathBuf,
    /// File contents.
    pub content: String,
}

/// Runs the lint command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: &[String],
    settings: &Settings,
) -> Result<()> {
    let root = project_dir(path);
    let config = load_config(&root, settings)?;

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        discover_files(path, exclude)?
    };
    tracing::info!("Analyzing {} files", files.len());

    let (result, sources) = lint_files(&files, &root, &config)?;
    super::output::print(&result, &sources, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Parses and checks each file, collecting every violation.
pub fn lint_files(
    files: &[PathBuf],
    root: &Path,
    config: &Config,
) -> Result<(LintResult, Vec<SourceFile>)> {
    let mut result = LintResult::new();
    let mut sources = Vec::with_capacity(files.len());

    for file_path in files {
        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        let tree = TypeScriptParser::for_path(file_path)
            .parse(&content, file_path)
            .with_context(|| format!("Failed to parse {}", file_path.display()))?;

        let ctx = FileContext::new(file_path, &content, root);
        let mut sink = TracingSink;
        let mut checker = Checker::new(config, &mut sink).with_file(&ctx);
        checker.check(&tree, 0);

        result.extend(LintResult {
            violations: checker.into_violations(),
            files_checked: 1,
        });
        sources.push(SourceFile {
            relative: ctx.relative_path.clone(),
            content: content.clone(),
        });
    }

    result.sort();
    Ok((result, sources))
}

/// Collects TypeScript files under `root`, honoring `.gitignore`.
pub fn discover_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = DEFAULT_EXCLUDES
        .iter()
        .copied()
        .chain(exclude.iter().map(String::as_str))
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern `{p}`")))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| TypeScriptParser::extensions().contains(&ext));
        if !supported {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(rel) || p.matches_path(path)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
