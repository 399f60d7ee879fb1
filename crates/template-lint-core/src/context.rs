//! Per-template context handed to rules while visiting nodes.

use crate::ast::SourceLocation;
use crate::types::{Diagnostic, Severity};

/// Context provided to a rule for the template being linted.
///
/// Acts as the diagnostic sink and gives access to the original source
/// text so diagnostics can quote the offending node.
#[derive(Debug)]
pub struct RuleContext<'a> {
    rule: &'a str,
    severity: Severity,
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    /// Creates a new context for `rule` over the template `source`.
    #[must_use]
    pub fn new(rule: &'a str, severity: Severity, source: &'a str) -> Self {
        Self {
            rule,
            severity,
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Name of the rule this context reports for.
    #[must_use]
    pub fn rule(&self) -> &str {
        self.rule
    }

    /// Full source of the template.
    #[must_use]
    pub fn source(&self) -> &str {
        self.source
    }

    /// Starts a diagnostic for this rule at `loc`, using the configured severity.
    #[must_use]
    pub fn diagnostic(&self, loc: &SourceLocation, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(self.rule, self.severity, loc, message)
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns the original source text covered by `loc`.
    ///
    /// Returns an empty string when the span lies outside the source.
    #[must_use]
    pub fn source_for(&self, loc: &SourceLocation) -> String {
        let (start, end) = (loc.start, loc.end);
        if start.line == 0 || end < start {
            return String::new();
        }

        let lines: Vec<&str> = self.source.split('\n').collect();
        if end.line > lines.len() {
            return String::new();
        }

        if start.line == end.line {
            return slice_chars(lines[start.line - 1], start.column, Some(end.column));
        }

        let mut out = slice_chars(lines[start.line - 1], start.column, None);
        for line in &lines[start.line..end.line - 1] {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&slice_chars(lines[end.line - 1], 0, Some(end.column)));
        out
    }

    /// Consumes the context, returning everything reported.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

fn slice_chars(line: &str, from: usize, to: Option<usize>) -> String {
    let chars = line.chars().skip(from);
    match to {
        Some(to) => chars.take(to.saturating_sub(from)).collect(),
        None => chars.collect(),
    }
}
