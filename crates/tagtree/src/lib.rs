//! In-memory HTML document builder.
//!
//! This crate lets a caller construct markup programmatically (nested tags,
//! attributes, text content) without string concatenation, then serialize
//! the finished tree to an HTML string.
//!
//! # Architecture
//!
//! Three node kinds form a shallow tree:
//! - [`Tag`]: a single element with attributes, optional text, and children
//! - [`Section`]: a structural container carrying only a name and children
//! - [`Document`]: the `<html>` root, which owns the output [`Sink`]
//!
//! Trees are built bottom-up: innermost tags first, each pushed into its
//! parent once configured. Serialization is a recursive depth-first
//! concatenation; only [`Document::finish`] performs I/O.
//!
//! Text and attribute values are emitted verbatim. No escaping is applied,
//! so caller-supplied markup metacharacters pass through unchanged.
//!
//! # Example
//!
//! ```
//! use tagtree::{Document, Section, Tag};
//!
//! let mut body = Section::new("body");
//! body.push(Tag::new("p").with_text("hi"));
//!
//! let mut doc = Document::new();
//! doc.push(body);
//!
//! assert!(doc.to_html().contains("<p >hi</p>"));
//! ```

mod attrs;
mod document;
mod element;
mod section;
mod tag;

pub use attrs::{join_classes, normalize_key};
pub use document::Document;
pub use element::Element;
pub use section::Section;
pub use tag::Tag;
pub use tagtree_sink::{Sink, SinkError};
