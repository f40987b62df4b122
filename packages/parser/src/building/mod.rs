//! Tree building for one section's line records.
//!
//! Generic placement nests each record by comparing its enumeration with
//! the labels on the path from the cursor to the root. Format quirks of
//! the GPO dump (continuation codes, redirected lines, footnotes) are
//! handled by a [`PlacementHooks`] strategy plugged into the builder.

mod config;
mod engine;
mod footnotes;
mod hooks;
mod locator;
pub mod placement;
mod types;

pub use config::{create_gpo_locator_rules, LocatorRules};
pub use engine::TreeBuilder;
pub use footnotes::{parse_definition, scan_markers, FootnoteDefinition, FootnoteMarker};
pub use hooks::{NoHooks, PlacementHooks};
pub use locator::GpoLocatorHooks;
pub use types::{BuildContext, BuiltTree, HookAction};
