//! Child-sequence element type.

use std::fmt;

use crate::section::Section;
use crate::tag::Tag;

/// A node that can appear in a child sequence.
///
/// Child sequences may mix [`Tag`]s and [`Section`]s; both convert into
/// `Element` implicitly through `From`, so `push(Tag::new("p"))` works on
/// any parent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// A regular element with attributes and optional text.
    Tag(Tag),
    /// A structural container without attributes or text.
    Section(Section),
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<Section> for Element {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => tag.fmt(f),
            Self::Section(section) => section.fmt(f),
        }
    }
}
