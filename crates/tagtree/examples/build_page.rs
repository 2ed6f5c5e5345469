//! Build a small page bottom-up and emit it to stdout.
//!
//! Run with `cargo run --example build_page`. Pass a path as the first
//! argument to write the page to a file instead.

use tagtree::{Document, Section, SinkError, Tag};

fn main() -> Result<(), SinkError> {
    let mut head = Section::new("head");
    head.push(Tag::new("title").with_text("hello"));

    let mut div = Tag::new("div")
        .with_classes(["container", "container-fluid"])
        .with_attr("id", "lead");
    div.push(Tag::new("p").with_text("another test"));
    div.push(
        Tag::new("img")
            .with_attr("src", "/icon.png")
            .with_attr("data_image", "responsive")
            .with_void(),
    );

    let mut body = Section::new("body");
    body.push(Tag::new("h1").with_classes(["main-text"]).with_text("Test"));
    body.push(div);

    let mut doc = match std::env::args().nth(1) {
        Some(path) => Document::with_output(path),
        None => Document::new(),
    };
    doc.push(head);
    doc.push(body);
    doc.finish()
}
