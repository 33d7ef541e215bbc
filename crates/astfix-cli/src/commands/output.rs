//! Shared output formatting for lint results.

use anyhow::Result;
use astfix_core::{LintResult, Severity, ViolationDiagnostic};

use super::lint::SourceFile;
use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, sources: &[SourceFile], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Pretty => print_pretty(result, sources),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    if result.violations.is_empty() {
        println!("\x1b[32mNo issues found\x1b[0m");
        return;
    }

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_pretty(result: &LintResult, sources: &[SourceFile]) {
    if result.violations.is_empty() {
        println!("No issues found");
        return;
    }

    for violation in &result.violations {
        let content = sources
            .iter()
            .find(|s| s.relative == violation.location.file)
            .map(|s| s.content.clone())
            .unwrap_or_default();
        let name = violation.location.file.display().to_string();
        let report = miette::Report::new(ViolationDiagnostic::new(violation, name, content));
        println!("{report:?}");
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
