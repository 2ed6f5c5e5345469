//! Document root and output dispatch.

use std::fmt::Write;
use std::path::PathBuf;

use tagtree_sink::{Sink, SinkError};

use crate::element::Element;

/// The outermost `<html>` wrapper, owning the output sink.
///
/// A document is the single point where I/O occurs: [`to_html`] is pure
/// and repeatable, while [`finish`] serializes once and hands the string
/// to the sink.
///
/// # Example
///
/// ```no_run
/// use tagtree::{Document, Section, Tag};
///
/// let mut body = Section::new("body");
/// body.push(Tag::new("p").with_text("hi"));
///
/// let mut doc = Document::with_output("index.html");
/// doc.push(body);
/// doc.finish()?;
/// # Ok::<(), tagtree::SinkError>(())
/// ```
///
/// [`to_html`]: Self::to_html
/// [`finish`]: Self::finish
#[derive(Debug, Clone, Default)]
pub struct Document {
    sink: Sink,
    children: Vec<Element>,
}

impl Document {
    /// Create a document that emits to standard output on [`finish`].
    ///
    /// [`finish`]: Self::finish
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that writes to the given file path on [`finish`],
    /// replacing any existing file content.
    ///
    /// [`finish`]: Self::finish
    #[must_use]
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self::with_sink(Sink::File(path.into()))
    }

    /// Create a document with an explicit sink.
    #[must_use]
    pub fn with_sink(sink: Sink) -> Self {
        Self {
            sink,
            children: Vec::new(),
        }
    }

    /// Append a top-level element.
    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Top-level elements in append order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize the tree without performing any I/O.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<html>");
        for child in &self.children {
            // Infallible on String.
            let _ = write!(html, "{child}");
        }
        html.push_str("\n</html>");
        html
    }

    /// Serialize the tree and hand the result to the sink.
    ///
    /// Sink failures propagate as-is; nothing retries or cleans up.
    pub fn finish(self) -> Result<(), SinkError> {
        self.sink.write(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::section::Section;
    use crate::tag::Tag;

    /// Rebuild the sample page exercising every node kind.
    fn sample_document(sink: Sink) -> Document {
        let mut head = Section::new("head");
        head.push(Tag::new("title").with_text("hello"));

        let mut div = Tag::new("div")
            .with_classes(["container", "container-fluid"])
            .with_attr("id", "lead");
        div.push(Tag::new("p").with_text("another test"));
        div.push(
            Tag::new("img")
                .with_attr("scr", "/icon.png")
                .with_attr("data_image", "responsive")
                .with_void(),
        );

        let mut body = Section::new("body");
        body.push(Tag::new("h1").with_classes(["main-text"]).with_text("Test"));
        body.push(div);

        let mut doc = Document::with_sink(sink);
        doc.push(head);
        doc.push(body);
        doc
    }

    const SAMPLE_HTML: &str = "<html>\n    <head>\n        <title >hello</title>\n    </head>\n    <body>\n        <h1 class='main-text'>Test</h1>\n        <div class='container container-fluid' id='lead'>\n        <p >another test</p>\n        <img scr='/icon.png' data-image='responsive'>\n        </div>\n    </body>\n</html>";

    #[test]
    fn test_sample_document_serializes_byte_for_byte() {
        assert_eq!(sample_document(Sink::Stdout).to_html(), SAMPLE_HTML);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::new().to_html(), "<html>\n</html>");
    }

    #[test]
    fn test_children_are_not_reordered() {
        let mut doc = Document::new();
        doc.push(Section::new("head"));
        doc.push(Section::new("body"));

        assert_eq!(
            doc.to_html(),
            "<html>\n    <head>\n\n    </head>\n    <body>\n\n    </body>\n</html>"
        );
    }

    #[test]
    fn test_plain_paragraph_round_trip() {
        let mut body = Section::new("body");
        body.push(Tag::new("p").with_text("hi"));
        let mut doc = Document::new();
        doc.push(body);

        let html = doc.to_html();
        assert!(html.contains("<p >hi</p>"));
        assert!(html.starts_with("<html>"));
        assert!(html.contains("<body>") && html.contains("</body>"));
        assert!(html.ends_with("\n</html>"));
    }

    #[test]
    fn test_to_html_is_idempotent() {
        let doc = sample_document(Sink::Stdout);
        assert_eq!(doc.to_html(), doc.to_html());
    }

    #[test]
    fn test_finish_writes_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");

        sample_document(Sink::file(&path)).finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_HTML);
    }

    #[test]
    fn test_finish_propagates_sink_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("page.html");

        let result = Document::with_output(path).finish();
        assert!(matches!(result, Err(SinkError::File { .. })));
    }
}
