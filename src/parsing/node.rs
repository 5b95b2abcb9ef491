//! Pure predicates over the parsed HTML tree
//!
//! The rest of the engine sees the document through these helpers only:
//! element identity, attribute lookup, and recursive text extraction. All
//! functions are side-effect free views over an immutable tree.

use ego_tree::NodeRef;
use scraper::Node;

/// A node of the parsed document tree.
pub type DomNode<'a> = NodeRef<'a, Node>;

/// True when the node is an element with the given (lowercase) tag name.
pub fn is_element(node: DomNode<'_>, name: &str) -> bool {
    node.value()
        .as_element()
        .is_some_and(|el| el.name() == name)
}

/// Attribute lookup. Missing attributes (and non-element nodes) yield
/// `None`; lookup never fails.
pub fn attr<'a>(node: DomNode<'a>, name: &str) -> Option<&'a str> {
    node.value().as_element().and_then(|el| el.attr(name))
}

/// True when the node's `class` attribute contains the given class token.
pub fn has_class(node: DomNode<'_>, class: &str) -> bool {
    attr(node, "class")
        .map(|v| v.split_ascii_whitespace().any(|token| token == class))
        .unwrap_or(false)
}

/// First element child, skipping text and comment nodes.
pub fn first_element_child(node: DomNode<'_>) -> Option<DomNode<'_>> {
    node.children().find(|child| child.value().is_element())
}

/// The node's `href` resolved to an absolute URL against the site root.
///
/// A missing or unresolvable href yields an empty string; links in the
/// result model are opaque references, never fetched by this crate.
pub fn absolute_href(node: DomNode<'_>, site_root: &url::Url) -> String {
    attr(node, "href")
        .and_then(|href| site_root.join(href).ok())
        .map(|resolved| resolved.to_string())
        .unwrap_or_default()
}

/// Visible text of the node and all descendants, depth-first.
///
/// Join rule: every text node is trimmed, empty fragments are dropped, and
/// the remaining fragments are joined with exactly one space. The result
/// never has leading or trailing whitespace.
pub fn text_contents(node: DomNode<'_>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let Some(text) = descendant.value().as_text() {
            let fragment = text.trim();
            if !fragment.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(fragment);
            }
        }
    }
    out
}
