//! Check command implementation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use template_lint_core::ast::Node;
use template_lint_core::{Config, LintResult, Linter, Template};

use crate::config_resolver::ConfigSource;
use crate::{OutputFormat, PLUGINS};

/// A template AST file as emitted by the template parser.
///
/// The original template text may be embedded as `source`; otherwise it is
/// read from the sibling `.hbs` file.
#[derive(Debug, Deserialize)]
struct AstFile {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    body: Vec<Node>,
}

/// Runs the check command.
pub fn run(paths: &[PathBuf], format: OutputFormat, source: &ConfigSource) -> Result<()> {
    let linter = build_linter(source.load()?)?;

    tracing::info!(
        "Linting {} template(s) with {} rule(s)",
        paths.len(),
        linter.rule_count()
    );

    let mut result = LintResult::new();
    let mut sources = BTreeMap::new();
    for path in paths {
        let (template, text) = load_template(path)?;
        result.extend(linter.lint(&template, &text).in_file(path));
        sources.insert(path.clone(), text);
    }

    super::output::print(&result, &sources, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Builds a linter with every bundled plugin registered.
pub fn build_linter(config: Config) -> Result<Linter> {
    let mut builder = Linter::builder().config(config);
    for plugin in PLUGINS {
        builder = builder.plugin(*plugin);
    }
    builder.build().context("Failed to build linter")
}

fn load_template(path: &Path) -> Result<(Template, String)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: AstFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse template AST: {}", path.display()))?;

    let source = match file.source {
        Some(source) => source,
        None => {
            let sibling = sibling_source_path(path);
            std::fs::read_to_string(&sibling).unwrap_or_else(|_| {
                tracing::warn!(
                    "No source for {} (looked for {}); snippets will be empty",
                    path.display(),
                    sibling.display()
                );
                String::new()
            })
        }
    };

    Ok((Template { body: file.body }, source))
}

/// `index.hbs.json` → `index.hbs`, `index.json` → `index.hbs`.
fn sibling_source_path(path: &Path) -> PathBuf {
    let stripped = path.with_extension("");
    if stripped.extension().is_some_and(|ext| ext == "hbs") {
        stripped
    } else {
        path.with_extension("hbs")
    }
}
