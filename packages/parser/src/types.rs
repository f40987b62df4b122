//! Core data types for the parser.

use serde::{Deserialize, Serialize};

use crate::enumeration::Enumeration;

/// Where a line came from in the GPO locator dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionInfo {
    /// Locator code of the line (e.g. "I11", "I28").
    pub codearg: String,

    /// Line number within the title dump, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl PositionInfo {
    /// Create position info for a locator code.
    #[must_use]
    pub fn new(codearg: impl Into<String>) -> Self {
        Self {
            codearg: codearg.into(),
            line: None,
        }
    }

    /// Set the dump line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// One tokenized line of a section body.
///
/// Lines produced purely to express nesting carry no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Structural label, if the line is enumerated.
    pub label: Option<Enumeration>,

    /// Text content of the line.
    pub text: Option<String>,

    /// Source position, absent for nesting-only lines.
    pub position: Option<PositionInfo>,
}

impl LineRecord {
    /// Create a record from its parts.
    #[must_use]
    pub fn new(
        label: Option<Enumeration>,
        text: Option<String>,
        position: Option<PositionInfo>,
    ) -> Self {
        Self {
            label,
            text,
            position,
        }
    }

    /// An enumerated line.
    #[must_use]
    pub fn labeled(label: Enumeration, text: impl Into<String>) -> Self {
        Self::new(Some(label), Some(text.into()), None)
    }

    /// An unenumerated line of text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, Some(text.into()), None)
    }

    /// Attach a locator code.
    #[must_use]
    pub fn with_code(mut self, codearg: impl Into<String>) -> Self {
        self.position = Some(PositionInfo::new(codearg));
        self
    }

    /// Locator code of the line, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.position.as_ref().map(|p| p.codearg.as_str())
    }
}

/// A footnote bound to the node whose text carries its marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    /// Footnote number as written in the source.
    pub number: String,

    /// Byte offset of the marker within the owning line's text.
    pub offset: usize,

    /// Definition text with the marker prefix removed.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_record_constructors() {
        let record = LineRecord::labeled(Enumeration::parse("a"), "In general.").with_code("I11");
        assert_eq!(record.label.as_ref().map(Enumeration::text), Some("a"));
        assert_eq!(record.text.as_deref(), Some("In general."));
        assert_eq!(record.code(), Some("I11"));

        let plain = LineRecord::plain("Some text");
        assert!(plain.label.is_none());
        assert!(plain.code().is_none());
    }

    #[test]
    fn test_position_info_with_line() {
        let position = PositionInfo::new("I28").with_line(42);
        assert_eq!(position.codearg, "I28");
        assert_eq!(position.line, Some(42));
    }

    #[test]
    fn test_footnote_serialization() {
        let note = Footnote {
            number: "1".to_string(),
            offset: 12,
            text: "See note.".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["number"], "1");
        assert_eq!(json["offset"], 12);
    }
}
