//! Attribute construction helpers.
//!
//! Both normalizations applied when attributes are supplied are observable
//! output behaviors, so they live here as standalone pure functions.

use std::fmt::Write;

/// Normalize an attribute key: underscores become hyphens.
///
/// Lets callers use identifier-safe spellings for attributes whose real
/// names contain hyphens.
///
/// # Examples
///
/// ```
/// use tagtree::normalize_key;
///
/// assert_eq!(normalize_key("data_image"), "data-image");
/// assert_eq!(normalize_key("id"), "id");
/// ```
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
}

/// Join class names into a single `class` attribute value.
///
/// Names are separated by single spaces; one name produces no separator.
///
/// # Examples
///
/// ```
/// use tagtree::join_classes;
///
/// assert_eq!(join_classes(["container", "container-fluid"]), "container container-fluid");
/// assert_eq!(join_classes(["main-text"]), "main-text");
/// ```
#[must_use]
pub fn join_classes<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for class in classes {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class.as_ref());
    }
    joined
}

/// Render attribute pairs as `key='value'`, space-joined, insertion order.
#[must_use]
pub(crate) fn render_pairs(attributes: &[(String, String)]) -> String {
    let mut rendered = String::new();
    for (key, value) in attributes {
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        // Infallible on String.
        let _ = write!(rendered, "{key}='{value}'");
    }
    rendered
}
