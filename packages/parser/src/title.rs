//! Title driver: parse every section of a title dump and write the results.

use std::path::Path;

use crate::building::{BuiltTree, GpoLocatorHooks, TreeBuilder};
use crate::config::{section_citation, validate_title};
use crate::error::Result;
use crate::input::{SectionInput, TitleDump};
use crate::output::{save_outline, save_section, SectionEnvelope};
use crate::types::LineRecord;

/// Outcome of parsing one title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleReport {
    /// Sections parsed and written.
    pub parsed: usize,
    /// Citations of sections that failed to parse or write.
    pub failed: Vec<String>,
    /// Non-fatal warnings, prefixed with the section citation.
    pub warnings: Vec<String>,
}

/// Build the tree for one section's records.
///
/// # Errors
/// Fails if a locator patch cannot be applied, e.g. a continuation line
/// with no predecessor.
pub fn parse_section(records: Vec<LineRecord>) -> Result<BuiltTree> {
    TreeBuilder::new(records, GpoLocatorHooks::default()).build()
}

/// Parse, wrap and save one section.
fn process_section(
    section: &SectionInput,
    title: &str,
    year: u16,
    output_root: &Path,
    outline: bool,
) -> Result<Vec<String>> {
    let built = parse_section(section.records())?;

    let envelope = SectionEnvelope::new(
        title,
        section.number.as_str(),
        section.name.as_str(),
        built.tree.to_output(),
    );
    save_section(&envelope, output_root, year)?;

    if outline {
        save_outline(
            &built.tree.render_outline(),
            output_root,
            year,
            title,
            &section.number,
        )?;
    }

    Ok(built.warnings)
}

/// Parse every section of a title and write one JSON file per section.
///
/// A section that fails is logged and counted in `failed`; the remaining
/// sections are still processed.
///
/// # Arguments
/// * `dump` - The tokenized title
/// * `year` - Release year, used in output paths
/// * `output_root` - Base directory for output
/// * `outline` - Also write a `.txt` outline per section
///
/// # Errors
/// `InvalidTitle` if the dump's title identifier is malformed.
pub fn parse_title(
    dump: &TitleDump,
    year: u16,
    output_root: &Path,
    outline: bool,
) -> Result<TitleReport> {
    validate_title(&dump.title)?;

    let mut report = TitleReport::default();
    for section in &dump.sections {
        let citation = section_citation(&dump.title, &section.number);
        match process_section(section, &dump.title, year, output_root, outline) {
            Ok(warnings) => {
                report.parsed += 1;
                report
                    .warnings
                    .extend(warnings.into_iter().map(|w| format!("{citation}: {w}")));
            }
            Err(e) => {
                tracing::error!(citation = %citation, error = %e, "Failed to parse section");
                report.failed.push(citation);
            }
        }
    }

    tracing::info!(
        title = %dump.title,
        parsed = report.parsed,
        failed = report.failed.len(),
        "Finished title"
    );
    Ok(report)
}
