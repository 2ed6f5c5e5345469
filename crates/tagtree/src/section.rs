//! Top-level structural containers.

use std::fmt;

use crate::element::Element;

/// A structural container tag, such as `<head>` or `<body>`.
///
/// Deliberately simpler than [`Tag`]: a section carries only a name and
/// children, never attributes or inline text. Unlike a childless [`Tag`],
/// a childless section still renders its opening and closing tags on
/// separate lines.
///
/// [`Tag`]: crate::Tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    name: String,
    children: Vec<Element>,
}

impl Section {
    /// Create a section with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child element.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child elements in append order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n    <{}>\n", self.name)?;
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "\n    </{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tag::Tag;

    #[test]
    fn test_section_with_child() {
        let mut head = Section::new("head");
        head.push(Tag::new("title").with_text("hello"));

        assert_eq!(
            head.to_string(),
            "\n    <head>\n        <title >hello</title>\n    </head>"
        );
    }

    #[test]
    fn test_empty_section_is_still_multiline() {
        assert_eq!(Section::new("body").to_string(), "\n    <body>\n\n    </body>");
    }

    #[test]
    fn test_section_preserves_child_order() {
        let mut body = Section::new("body");
        body.push(Tag::new("h1").with_text("first"));
        body.push(Tag::new("h2").with_text("second"));

        let rendered = body.to_string();
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_nested_section_as_child() {
        let mut outer = Section::new("body");
        outer.push(Section::new("main"));

        assert_eq!(
            outer.to_string(),
            "\n    <body>\n\n    <main>\n\n    </main>\n    </body>"
        );
    }
}
