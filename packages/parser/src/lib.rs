//! USC Parser - Build outline trees from tokenized United States Code sections.
//!
//! Each section of a title arrives as a flat list of line records, some
//! carrying an enumeration label such as `(a)`, `(1)` or `(iv)`. This crate
//! rebuilds the nesting those labels imply, attaches footnotes to the lines
//! that reference them, and writes one JSON tree per section.
//!
//! # Example
//!
//! ```
//! use uscode_parser::building::{NoHooks, TreeBuilder};
//! use uscode_parser::enumeration::Enumeration;
//! use uscode_parser::types::LineRecord;
//!
//! let records = vec![
//!     LineRecord::labeled(Enumeration::parse("a"), "In general."),
//!     LineRecord::labeled(Enumeration::parse("1"), "First."),
//!     LineRecord::labeled(Enumeration::parse("b"), "Exception."),
//! ];
//! let tree = TreeBuilder::new(records, NoHooks).build().unwrap().into_tree();
//! assert_eq!(
//!     tree.render_outline(),
//!     "(a) In general.\n  (1) First.\n(b) Exception.\n"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants, validation and path builders
//! - [`enumeration`]: Labels, numbering schemes and the successor relation
//! - [`types`]: Line records, positions and footnotes
//! - [`error`]: Error types and Result alias
//! - [`stream`]: Indexed record sequence with lookahead
//! - [`tree`]: Arena-backed document tree and its output forms
//! - [`building`]: Placement, locator-code hooks and footnote binding
//! - [`input`]: Tokenized title dumps
//! - [`output`]: Section envelope writer
//! - [`title`]: Per-title driver
//! - [`cli`]: Command-line interface

pub mod building;
pub mod cli;
pub mod config;
pub mod enumeration;
pub mod error;
pub mod input;
pub mod output;
pub mod stream;
pub mod title;
pub mod tree;
pub mod types;

// Re-export main functions
pub use title::{parse_section, parse_title, TitleReport};

// Re-export commonly used items
pub use config::{validate_title, validate_year};
pub use enumeration::{Enumeration, Scheme};
pub use error::{ParserError, Result};
pub use tree::{DocumentTree, NodeId, OutputNode};
pub use types::{Footnote, LineRecord, PositionInfo};
