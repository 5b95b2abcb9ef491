//! Markup extraction engine
//!
//! Recovers the [`crate::domain`] model from the site's table-based result
//! markup. The markup was never meant for machine parsing, so everything
//! here is best-effort: unrecognized shapes degrade to empty fields or
//! skipped rows instead of failing the page.
//!
//! Layering, leaves first:
//!
//! - [`node`] — pure predicates over the parsed HTML tree
//! - [`entry`] — builders that turn sibling runs into words and meanings
//! - [`table`] — walks the translation table and groups rows into words
//! - [`document`] — whole-document traversal locating the table and
//!   pagination links

pub mod document;
pub mod entry;
pub mod node;
pub mod table;

pub use document::{parse_document, ParsedPage};
