//! Error types for MusicXML interchange
//!
//! Fatal outcomes only. Everything recoverable is reported through
//! [`crate::diagnostics::Diagnostics`] and the import carries on.

use thiserror::Error;

/// Top-level interchange error, one per failed import or export
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Document is not well-formed or violates the expected element structure
    #[error("XML parsing failed: {0}")]
    Parse(#[from] ParseError),

    /// Input is not an uncompressed partwise MusicXML document
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    /// Declared MusicXML version is newer than supported or unreadable
    #[error("Unsupported MusicXML version: {0}")]
    UnsupportedVersion(String),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConversionError {
    /// Stable category name, used by the JS API
    pub fn category(&self) -> &'static str {
        match self {
            ConversionError::Parse(_) => "parse",
            ConversionError::UnknownFileType(_) => "unknown-file-type",
            ConversionError::UnsupportedVersion(_) => "unsupported-version",
            ConversionError::Io(_) => "io",
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::Io(err.to_string())
    }
}

/// Fatal structural errors, always located
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Malformed XML or an unexpected token where an element had to end
    #[error("line {line}, column {column}: {message}")]
    Structural {
        line: usize,
        column: usize,
        message: String,
    },

    /// Required structural element is missing
    #[error("line {line}, column {column}: missing required element <{element}>")]
    MissingRequiredElement {
        line: usize,
        column: usize,
        element: String,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Structural { line, .. } | ParseError::MissingRequiredElement { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::Structural { column, .. }
            | ParseError::MissingRequiredElement { column, .. } => *column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::format_located_error;

    #[test]
    fn test_structural_message_is_located() {
        let err = ParseError::Structural {
            line: 3,
            column: 14,
            message: "bad token".to_string(),
        };
        assert_eq!(err.to_string(), format_located_error(3, 14, "bad token"));
        assert_eq!((err.line(), err.column()), (3, 14));
    }

    #[test]
    fn test_categories() {
        let err: ConversionError = ParseError::MissingRequiredElement {
            line: 1,
            column: 1,
            element: "part".into(),
        }
        .into();
        assert_eq!(err.category(), "parse");
        assert_eq!(ConversionError::Io("x".into()).category(), "io");
        assert_eq!(ConversionError::UnknownFileType("x".into()).category(), "unknown-file-type");
    }
}
