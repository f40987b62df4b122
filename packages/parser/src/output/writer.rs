//! Section envelope writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{section_citation, section_output_path};
use crate::error::Result;
use crate::tree::OutputNode;

/// A parsed section as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEnvelope {
    /// Citation such as `usc/5/101`.
    pub citation: String,
    /// Root of the section tree.
    pub data: OutputNode,
    pub name: String,
    pub number: String,
    pub title: String,
}

impl SectionEnvelope {
    /// Wrap a section tree, deriving the citation from title and number.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
        data: OutputNode,
    ) -> Self {
        let title = title.into();
        let number = number.into();
        Self {
            citation: section_citation(&title, &number),
            data,
            name: name.into(),
            number,
            title,
        }
    }
}

/// Generate pretty JSON for an envelope, with object keys sorted.
///
/// # Errors
/// `Json` if serialization fails.
pub fn generate_json(envelope: &SectionEnvelope) -> Result<String> {
    // Value objects are BTreeMaps, so going through Value sorts every level
    let value = serde_json::to_value(envelope)?;
    let mut content = serde_json::to_string_pretty(&value)?;
    content.push('\n');
    Ok(content)
}

/// Write `content` to `path` through a synced temp file and a rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

/// Save a section envelope as JSON.
///
/// # Arguments
/// * `envelope` - The section to save
/// * `output_root` - Base directory for output
/// * `year` - Release year of the source dump
///
/// # Returns
/// Path of `<output_root>/<year>/<title>/<section>.json`
pub fn save_section(envelope: &SectionEnvelope, output_root: &Path, year: u16) -> Result<PathBuf> {
    let path = section_output_path(output_root, year, &envelope.title, &envelope.number);
    write_atomic(&path, &generate_json(envelope)?)?;
    tracing::debug!(citation = %envelope.citation, path = %path.display(), "Saved section");
    Ok(path)
}

/// Save a plain-text outline next to the section's JSON file.
///
/// # Returns
/// Path of `<output_root>/<year>/<title>/<section>.txt`
pub fn save_outline(
    outline: &str,
    output_root: &Path,
    year: u16,
    title: &str,
    section: &str,
) -> Result<PathBuf> {
    let path = section_output_path(output_root, year, title, section).with_extension("txt");
    write_atomic(&path, outline)?;
    Ok(path)
}
