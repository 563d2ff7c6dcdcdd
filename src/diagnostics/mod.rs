//! Diagnostics for MusicXML conversion
//!
//! Location-tagged, non-fatal issue reporting. Every recoverable fallback in
//! the conversion layer (unknown accidental name, unparseable number, unknown
//! sub-element, ...) lands here as a [`DiagnosticMark`] and is mirrored to the
//! `log` facade. Fatal problems use the same location format but travel as
//! errors instead (see `converters::musicxml::errors`).

use serde::{Deserialize, Serialize};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark describing an issue at a specific source location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    /// 1-based line in the source document (0 when unknown)
    pub line: usize,
    /// 1-based column in the source document (0 when unknown)
    pub col: usize,
    /// Length of the highlight (default 1)
    pub len: usize,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "unknown_accidental", "unexpected_element")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        line: usize,
        col: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            col,
            len: 1,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create with custom length (for range highlights)
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Message prefixed with its location
    pub fn located_message(&self) -> String {
        format_located_error(self.line, self.col, &self.message)
    }
}

/// Collection of diagnostic marks for one conversion
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks, in the order they were raised
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        log::debug!("{}", mark.located_message());
        self.marks.push(mark);
    }

    /// Record a warning at a location
    pub fn warn(&mut self, line: usize, col: usize, kind: &str, message: impl Into<String>) {
        self.add(DiagnosticMark::new(
            line,
            col,
            DiagnosticSeverity::Warning,
            kind,
            message,
        ));
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        for mark in marks {
            self.add(mark);
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Number of marks
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Iterate over marks
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMark> {
        self.marks.iter()
    }

    /// Marks of a given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |m| m.kind == kind)
    }

    /// All messages with their locations, one per mark
    pub fn located_messages(&self) -> Vec<String> {
        self.marks.iter().map(DiagnosticMark::located_message).collect()
    }
}

/// Format a message with its source location: `line L, column C: message`
pub fn format_located_error(line: usize, column: usize, message: &str) -> String {
    format!("line {}, column {}: {}", line, column, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_located_error() {
        assert_eq!(
            format_located_error(12, 7, "unknown accidental 'foo'"),
            "line 12, column 7: unknown accidental 'foo'"
        );
    }

    #[test]
    fn test_diagnostic_mark_creation() {
        let mark = DiagnosticMark::new(
            3,
            5,
            DiagnosticSeverity::Warning,
            "unexpected_element",
            "unexpected element <foo>",
        );

        assert_eq!(mark.line, 3);
        assert_eq!(mark.col, 5);
        assert_eq!(mark.len, 1);
        assert_eq!(mark.severity, DiagnosticSeverity::Warning);
        assert_eq!(mark.located_message(), "line 3, column 5: unexpected element <foo>");
    }

    #[test]
    fn test_diagnostics_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.warn(1, 1, "warn", "Warning");
        assert!(!diags.has_errors());
        assert_eq!(diags.len(), 1);

        diags.add(DiagnosticMark::new(1, 2, DiagnosticSeverity::Error, "err", "Error"));
        assert!(diags.has_errors());
        assert_eq!(diags.of_kind("err").count(), 1);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut diags = Diagnostics::new();
        diags.warn(1, 1, "first", "a");
        diags.extend(vec![
            DiagnosticMark::new(2, 1, DiagnosticSeverity::Info, "second", "b"),
            DiagnosticMark::new(3, 4, DiagnosticSeverity::Error, "third", "c").with_len(5),
        ]);
        let kinds: Vec<&str> = diags.iter().map(|m| m.kind.as_str()).collect();
        assert_eq!(kinds, vec!["first", "second", "third"]);
        assert_eq!(diags.of_kind("third").next().map(|m| m.len), Some(5));
        assert!(diags.has_errors());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let mark = DiagnosticMark::new(1, 1, DiagnosticSeverity::Info, "k", "m");
        let json = serde_json::to_string(&mark).unwrap();
        assert!(json.contains("\"severity\":\"info\""));
    }
}
