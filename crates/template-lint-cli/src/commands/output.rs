//! Shared output formatting for lint results.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;
use template_lint_core::{DiagnosticReport, LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `sources` maps each linted file to its template text, used to render
/// annotated snippets in text mode.
pub fn print(
    result: &LintResult,
    sources: &BTreeMap<PathBuf, String>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result, sources),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult, sources: &BTreeMap<PathBuf, String>) {
    let (errors, warnings, infos) = result.count_by_severity();

    for diagnostic in &result.diagnostics {
        let source = diagnostic
            .file
            .as_ref()
            .and_then(|file| sources.get(file).map(|text| (file, text)))
            .filter(|(_, text)| !text.is_empty());

        match source {
            Some((file, text)) => {
                let report =
                    DiagnosticReport::new(diagnostic, &file.display().to_string(), text);
                println!("{:?}", miette::Report::new(report));
            }
            None => {
                let severity_indicator = match diagnostic.severity {
                    Severity::Error => "\x1b[31merror\x1b[0m",
                    Severity::Warning => "\x1b[33mwarning\x1b[0m",
                    Severity::Info => "\x1b[34minfo\x1b[0m",
                };
                let location = match &diagnostic.file {
                    Some(file) => format!("{}:{}", file.display(), diagnostic.line),
                    None => diagnostic.line.to_string(),
                };
                println!(
                    "{} at {}:{}",
                    diagnostic.rule, location, diagnostic.column
                );
                println!("  {}: {}", severity_indicator, diagnostic.message);
                if !diagnostic.source.is_empty() {
                    println!("  | {}", diagnostic.source);
                }
                println!();
            }
        }
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} template(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.templates_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}
