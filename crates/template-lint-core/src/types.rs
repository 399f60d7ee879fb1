//! Core types for lint diagnostics and results.

use crate::ast::SourceLocation;
use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses a severity name as written in lint configuration.
    ///
    /// Accepts `error`, `warn`/`warning` and `info`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A lint finding reported by a rule through [`crate::RuleContext`].
///
/// Lines are 1-indexed and columns 0-indexed, as in the template AST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Name of the rule that produced this diagnostic (e.g., "denylist").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Start line.
    pub line: usize,
    /// Start column.
    pub column: usize,
    /// End line.
    pub end_line: usize,
    /// End column (exclusive).
    pub end_column: usize,
    /// Original source text of the offending node.
    pub source: String,
    /// Whether an automatic fix exists. Always `false` for denylist findings.
    pub is_fixable: bool,
    /// Template the diagnostic belongs to, when linting files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    /// Creates a new diagnostic spanning `loc`.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        loc: &SourceLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            line: loc.start.line,
            column: loc.start.column,
            end_line: loc.end.line,
            end_column: loc.end.column,
            source: String::new(),
            is_fixable: false,
            file: None,
        }
    }

    /// Attaches the source snippet of the offending node.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match &self.file {
            Some(file) => format!(
                "{} at {}:{}:{}\n",
                self.rule,
                file.display(),
                self.line,
                self.column
            ),
            None => format!(
                "{} at {}:{}-{}:{}\n",
                self.rule, self.line, self.column, self.end_line, self.end_column
            ),
        };
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if !self.source.is_empty() {
            let _ = writeln!(output, "  | {}", self.source);
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:", file.display())?;
        }
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.rule, self.message
        )
    }
}

/// A [`Diagnostic`] paired with its template source, for rich rendering with `miette`.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("[{rule}] {message}")]
pub struct DiagnosticReport {
    rule: String,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl DiagnosticReport {
    /// Builds a report for `diagnostic` against the full template `source`.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, name: &str, source: &str) -> Self {
        let start = offset_for(source, diagnostic.line, diagnostic.column);
        let end = offset_for(source, diagnostic.end_line, diagnostic.end_column).max(start);
        Self {
            rule: diagnostic.rule.clone(),
            message: diagnostic.message.clone(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((start, end - start)),
            label_message: format!("{}: forbidden here", diagnostic.severity),
        }
    }
}

/// Calculates the byte offset of a (1-indexed line, 0-indexed char column) pair.
///
/// Out-of-range positions clamp to the end of the line or of the source.
#[must_use]
pub fn offset_for(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in source.split('\n').enumerate() {
        if i + 1 == line {
            let within = line_content
                .char_indices()
                .nth(column)
                .map_or(line_content.len(), |(idx, _)| idx);
            return offset + within;
        }
        offset += line_content.len() + 1;
    }

    source.len()
}

/// Result of running the linter over one or more templates.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of templates checked.
    pub templates_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags every diagnostic with the template file it came from.
    #[must_use]
    pub fn in_file(mut self, path: &Path) -> Self {
        for d in &mut self.diagnostics {
            d.file = Some(path.to_path_buf());
        }
        self
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Adds diagnostics from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.templates_checked += other.templates_checked;
    }
}
