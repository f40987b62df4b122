//! Footnote markers and definitions in GPO line text.
//!
//! A marker in running text looks like `\12\` followed by BEL and `N`. The
//! matching definition line starts with BEL, `N` and the same `\12\`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParserError, Result};

/// In-text footnote reference.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(\d+)\\\x07N").expect("valid regex"));

/// Prefix of a footnote definition line, up to the note text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DEFINITION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x07N\\(\d+)\\\s+").expect("valid regex"));

/// Char offset of the footnote number in a definition line.
const DEFINITION_NUMBER_OFFSET: usize = 3;

/// A footnote reference found in line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteMarker {
    pub number: String,
    /// Byte offset of the marker's first character.
    pub offset: usize,
}

/// A parsed footnote definition line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDefinition {
    pub number: String,
    /// Definition text with the marker prefix stripped.
    pub text: String,
}

/// Find every footnote marker in `text`.
///
/// # Examples
/// ```
/// use uscode_parser::building::scan_markers;
///
/// let markers = scan_markers("as amended\\1\\\x07N by law");
/// assert_eq!(markers.len(), 1);
/// assert_eq!(markers[0].number, "1");
/// assert_eq!(markers[0].offset, 10);
/// ```
#[must_use]
pub fn scan_markers(text: &str) -> Vec<FootnoteMarker> {
    MARKER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?;
            Some(FootnoteMarker {
                number: number.as_str().to_string(),
                offset: whole.start(),
            })
        })
        .collect()
}

/// Parse a footnote definition line.
///
/// # Errors
/// `MalformedFootnote` if the text does not start with BEL or carries no
/// number at the expected position.
pub fn parse_definition(text: &str) -> Result<FootnoteDefinition> {
    if !text.starts_with('\x07') {
        return Err(ParserError::MalformedFootnote(text.to_string()));
    }

    let number: String = text
        .chars()
        .skip(DEFINITION_NUMBER_OFFSET)
        .take_while(char::is_ascii_digit)
        .collect();
    if number.is_empty() {
        return Err(ParserError::MalformedFootnote(text.to_string()));
    }

    Ok(FootnoteDefinition {
        number,
        text: DEFINITION_PREFIX.replace(text, "").into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_markers_multiple() {
        let text = "first\\1\\\x07N and second\\2\\\x07N";
        let markers = scan_markers(text);
        assert_eq!(
            markers,
            vec![
                FootnoteMarker {
                    number: "1".to_string(),
                    offset: 5,
                },
                FootnoteMarker {
                    number: "2".to_string(),
                    offset: 21,
                },
            ]
        );
    }

    #[test]
    fn test_scan_markers_byte_offset() {
        // "§ " is three bytes
        let markers = scan_markers("§ 5\\3\\\x07N");
        assert_eq!(markers[0].offset, 4);
        assert_eq!(markers[0].number, "3");
    }

    #[test]
    fn test_scan_markers_requires_tag() {
        assert!(scan_markers("path\\1\\ without tag").is_empty());
        assert!(scan_markers("plain text").is_empty());
    }

    #[test]
    fn test_parse_definition() {
        let def = parse_definition("\x07N\\1\\ So in original.").unwrap();
        assert_eq!(def.number, "1");
        assert_eq!(def.text, "So in original.");
    }

    #[test]
    fn test_parse_definition_multi_digit() {
        let def = parse_definition("\x07N\\12\\  See note.").unwrap();
        assert_eq!(def.number, "12");
        assert_eq!(def.text, "See note.");
    }

    #[test]
    fn test_parse_definition_malformed() {
        assert!(matches!(
            parse_definition("N\\1\\ text"),
            Err(ParserError::MalformedFootnote(_))
        ));
        assert!(matches!(
            parse_definition("\x07N\\x\\ text"),
            Err(ParserError::MalformedFootnote(_))
        ));
        assert!(parse_definition("").is_err());
    }
}
