//! Regular HTML elements.

use std::fmt;

use crate::attrs::{join_classes, normalize_key, render_pairs};
use crate::element::Element;

/// A single HTML element: name, attributes, optional text, children.
///
/// Configure with the `with_*` builders, then append to a parent. The
/// element name is fixed at construction; `text` stays publicly mutable so
/// content can be filled in after the builder chain.
///
/// Neither `text` nor attribute values are escaped on output.
///
/// # Example
///
/// ```
/// use tagtree::Tag;
///
/// let mut div = Tag::new("div")
///     .with_classes(["container", "container-fluid"])
///     .with_attr("id", "lead");
/// div.push(Tag::new("p").with_text("another test"));
///
/// assert!(div.to_string().contains("class='container container-fluid' id='lead'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    name: String,
    attributes: Vec<(String, String)>,
    void: bool,
    /// Inline text content, emitted verbatim before any children.
    pub text: String,
    children: Vec<Element>,
}

impl Tag {
    /// Create an element with the given name and no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            void: false,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute from a list of class names.
    ///
    /// Names are joined with single spaces; see [`join_classes`].
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes
            .push(("class".to_owned(), join_classes(classes)));
        self
    }

    /// Add one attribute.
    ///
    /// Underscores in the key become hyphens (see [`normalize_key`]), so
    /// `data_image` stores as `data-image`. The value is stringified
    /// through its `Display` impl and emitted verbatim, whatever it
    /// contains.
    #[must_use]
    pub fn with_attr(mut self, key: impl AsRef<str>, value: impl fmt::Display) -> Self {
        self.attributes
            .push((normalize_key(key.as_ref()), value.to_string()));
        self
    }

    /// Add attributes from key/value pairs, preserving iteration order.
    #[must_use]
    pub fn with_attrs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        for (key, value) in pairs {
            self = self.with_attr(key, value);
        }
        self
    }

    /// Mark this element as void: it never gets a closing tag and renders
    /// as a single self-closing-style opening tag, like `<img>`.
    #[must_use]
    pub fn with_void(mut self) -> Self {
        self.void = true;
        self
    }

    /// Set the inline text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this element is void (self-closing).
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Attribute pairs in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child elements in append order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl fmt::Display for Tag {
    /// Render the element.
    ///
    /// The opening tag always carries a space between the name and the
    /// attribute string, even when there are no attributes (`<p >`). The
    /// indentation and newlines are part of the output contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = render_pairs(&self.attributes);
        if self.void {
            // Void elements ignore text and children and never close.
            write!(f, "\n        <{} {attrs}>", self.name)
        } else if self.children.is_empty() {
            write!(f, "        <{} {attrs}>{}</{}>", self.name, self.text, self.name)
        } else {
            write!(f, "\n        <{} {attrs}>\n", self.name)?;
            f.write_str(&self.text)?;
            for child in &self.children {
                child.fmt(f)?;
            }
            write!(f, "\n        </{}>", self.name)
        }
    }
}
