//! Configuration constants and validation functions for the parser.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::error::{ParserError, Result};

/// Release year used when none is given on the command line.
pub const DEFAULT_YEAR: u16 = 2011;

/// Directory holding tokenized title dumps, laid out as `<year>/<title>.json`.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Root directory for parsed section output.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Title identifier: digits with an optional appendix letter (e.g. "5", "50A").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[A-Za-z]?$").expect("valid regex"));

/// Year pattern: YYYY.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// Validate a title identifier.
///
/// # Examples
/// ```
/// use uscode_parser::config::validate_title;
///
/// assert!(validate_title("5").is_ok());
/// assert!(validate_title("50A").is_ok());
/// assert!(validate_title("five").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if TITLE_PATTERN.is_match(title) {
        Ok(())
    } else {
        Err(ParserError::InvalidTitle(title.to_string()))
    }
}

/// Validate a release year.
///
/// Rejects years in the future since no release exists for them yet.
///
/// # Examples
/// ```
/// use uscode_parser::config::validate_year;
///
/// assert!(validate_year("2011").is_ok());
/// assert!(validate_year("11").is_err());
/// ```
pub fn validate_year(year: &str) -> Result<u16> {
    if !YEAR_PATTERN.is_match(year) {
        return Err(ParserError::InvalidYear(year.to_string()));
    }

    let parsed: u16 = year
        .parse()
        .map_err(|_| ParserError::InvalidYear(year.to_string()))?;

    let this_year = chrono::Local::now().year();
    if i32::from(parsed) > this_year {
        return Err(ParserError::InvalidYear(format!(
            "{year} is in the future (current year is {this_year})"
        )));
    }

    Ok(parsed)
}

/// Path of the tokenized dump for a title and release year.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use uscode_parser::config::title_filename;
///
/// assert_eq!(
///     title_filename(Path::new("data"), "5", 2011),
///     Path::new("data/2011/5.json")
/// );
/// ```
#[must_use]
pub fn title_filename(data_dir: &Path, title: &str, year: u16) -> PathBuf {
    data_dir.join(year.to_string()).join(format!("{title}.json"))
}

/// Path where a parsed section is written.
#[must_use]
pub fn section_output_path(output_root: &Path, year: u16, title: &str, section: &str) -> PathBuf {
    output_root
        .join(year.to_string())
        .join(title)
        .join(format!("{}.json", sanitize_component(section)))
}

/// Citation for a section, e.g. `usc/5/101`.
#[must_use]
pub fn section_citation(title: &str, section: &str) -> String {
    format!("usc/{title}/{section}")
}

/// Make a section number safe for use as a file name.
///
/// Section numbers are mostly alphanumeric but occasionally carry dashes
/// or dots ("1-1", "410.1"); path separators are replaced.
///
/// # Examples
/// ```
/// use uscode_parser::config::sanitize_component;
///
/// assert_eq!(sanitize_component("101"), "101");
/// assert_eq!(sanitize_component("1/2"), "1_2");
/// ```
#[must_use]
pub fn sanitize_component(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
