//! Tokenized title dumps read from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::enumeration::{Enumeration, Scheme};
use crate::error::{ParserError, Result};
use crate::types::{LineRecord, PositionInfo};

/// All sections of one title, as produced by the tokenizer.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleDump {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<SectionInput>,
}

/// One section: its identity and its body lines in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionInput {
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lines: Vec<RawLine>,
}

/// A body line as written by the tokenizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLine {
    /// Label text without parentheses.
    #[serde(rename = "enum", default)]
    pub enumeration: Option<String>,

    /// Explicit scheme; classified from the label text when absent.
    #[serde(default)]
    pub scheme: Option<Scheme>,

    /// The tokenizer already resolved the label as nested.
    #[serde(default)]
    pub nested: bool,

    #[serde(default)]
    pub text: Option<String>,

    /// Locator code; absent for nesting-only lines.
    #[serde(default)]
    pub code: Option<String>,

    /// Line number within the dump.
    #[serde(default)]
    pub line: Option<usize>,
}

impl RawLine {
    /// Convert to a line record for the tree builder.
    #[must_use]
    pub fn to_record(&self) -> LineRecord {
        let label = self
            .enumeration
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| {
                let label = match self.scheme {
                    Some(scheme) => Enumeration::new(text, scheme),
                    None => Enumeration::parse(text),
                };
                label.with_nested(self.nested)
            });

        let position = self.code.as_ref().map(|code| {
            let position = PositionInfo::new(code.clone());
            match self.line {
                Some(line) => position.with_line(line),
                None => position,
            }
        });

        LineRecord::new(label, self.text.clone(), position)
    }
}

impl SectionInput {
    /// Body lines as records, in order.
    #[must_use]
    pub fn records(&self) -> Vec<LineRecord> {
        self.lines.iter().map(RawLine::to_record).collect()
    }
}

/// Load a title dump.
///
/// # Errors
/// `TitleNotFound` if the file does not exist, `Io` or `Json` if it cannot
/// be read or decoded.
pub fn load_title(path: &Path) -> Result<TitleDump> {
    if !path.exists() {
        return Err(ParserError::TitleNotFound {
            title: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let dump: TitleDump = serde_json::from_str(&content)?;
    tracing::debug!(
        title = %dump.title,
        sections = dump.sections.len(),
        "Loaded title dump"
    );
    Ok(dump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const DUMP: &str = r#"{
        "title": "5",
        "sections": [{
            "number": "101",
            "name": "Executive departments",
            "lines": [
                {"text": "The Executive departments are:", "code": "I11", "line": 4},
                {"enum": "a", "text": "first", "code": "I11"},
                {"enum": "i", "scheme": "lower_alpha", "nested": true, "text": "nested"},
                {"enum": "", "text": "tail"}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_dump() {
        let dump: TitleDump = serde_json::from_str(DUMP).unwrap();
        assert_eq!(dump.title, "5");
        assert_eq!(dump.sections.len(), 1);
        assert_eq!(dump.sections[0].lines.len(), 4);
    }

    #[test]
    fn test_records() {
        let dump: TitleDump = serde_json::from_str(DUMP).unwrap();
        let records = dump.sections[0].records();

        assert_eq!(records[0].label, None);
        assert_eq!(
            records[0].position,
            Some(PositionInfo::new("I11").with_line(4))
        );

        assert_eq!(records[1].label, Some(Enumeration::parse("a")));
        assert_eq!(records[1].code(), Some("I11"));

        let nested = records[2].label.as_ref().unwrap();
        assert_eq!(nested.scheme(), Scheme::LowerAlpha);
        assert!(nested.was_nested());
        assert_eq!(records[2].position, None);

        // Empty labels are no labels
        assert_eq!(records[3].label, None);
        assert_eq!(records[3].text.as_deref(), Some("tail"));
    }

    #[test]
    fn test_load_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("5.json");
        fs::write(&path, DUMP).unwrap();

        let dump = load_title(&path).unwrap();
        assert_eq!(dump.sections[0].name, "Executive departments");
    }

    #[test]
    fn test_load_title_missing() {
        let dir = tempdir().unwrap();
        let err = load_title(&dir.path().join("7.json")).unwrap_err();
        assert!(matches!(err, ParserError::TitleNotFound { ref title, .. } if title == "7"));
    }

    #[test]
    fn test_load_title_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("5.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_title(&path), Err(ParserError::Json(_))));
    }
}
