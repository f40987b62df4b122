//! JSON output for parsed sections.

mod writer;

pub use writer::{generate_json, save_outline, save_section, SectionEnvelope};
