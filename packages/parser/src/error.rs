//! Error types for the parser.
//!
//! Placement itself never fails. Errors come from the driver (bad
//! arguments, missing input, IO) and from locator patches that refer to a
//! predecessor line the section never produced.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Invalid title identifier.
    #[error("Invalid title identifier: '{0}'. Expected a title number such as 5 or 50A")]
    InvalidTitle(String),

    /// Invalid year.
    #[error("Invalid year: '{0}'. Expected YYYY (e.g., 2011)")]
    InvalidYear(String),

    /// The tokenized title dump has not been produced yet.
    #[error("Title {title} has not been downloaded (expected {path})")]
    TitleNotFound { title: String, path: String },

    /// A continuation line refers to a locator code with no placed line.
    #[error("Locator code {code} continues {predecessor}, but no {predecessor} line was placed")]
    MissingPredecessor { code: String, predecessor: String },

    /// Footnote definition text without the leading BEL marker.
    #[error("Malformed footnote definition: {0:?}")]
    MalformedFootnote(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParserError::InvalidTitle("five".to_string());
        assert!(err.to_string().contains("five"));
        assert!(err.to_string().contains("50A"));
    }

    #[test]
    fn test_missing_predecessor_display() {
        let err = ParserError::MissingPredecessor {
            code: "I32".to_string(),
            predecessor: "I13".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Locator code I32 continues I13, but no I13 line was placed"
        );
    }

    #[test]
    fn test_malformed_footnote_display() {
        let err = ParserError::MalformedFootnote("N\\1\\ text".to_string());
        assert!(err.to_string().starts_with("Malformed footnote definition"));
    }
}
