//! Whole-document traversal
//!
//! Depth-first pre-order walk over the parsed document. Two triggers are
//! checked at every node before descending: the translation table (handed
//! to the table walker) and pagination tooltip containers (handed to the
//! link extractor). Matched subtrees are not descended into. One document
//! answers one part of the query, so exactly one word list comes out;
//! links come out in document order.

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::domain::{PageLink, Word, WordList};
use crate::parsing::node::{
    absolute_href, attr, first_element_child, has_class, is_element, text_contents, DomNode,
};
use crate::parsing::table::walk_table;

/// Everything extracted from one result page.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Words found on the page. The query label is assigned by the
    /// caller, which knows whether the query was split.
    pub list: WordList,

    /// Links to pages answering the other parts of the query, in
    /// document order. Empty when the site did not split the query.
    pub links: Vec<PageLink>,
}

/// Parse one result page fetched from `page_url`.
///
/// A page without a translation table is a legitimate empty result, not
/// an error.
pub fn parse_document(html: &Html, page_url: &str, site_root: &Url) -> ParsedPage {
    let mut state = Collected::default();
    walk(html.tree.root(), site_root, &mut state);

    ParsedPage {
        list: WordList {
            words: state.words.unwrap_or_default(),
            query: String::new(),
            link: page_url.to_string(),
        },
        links: state.links,
    }
}

#[derive(Default)]
struct Collected {
    words: Option<Vec<Word>>,
    links: Vec<PageLink>,
}

fn walk(node: DomNode<'_>, site_root: &Url, state: &mut Collected) {
    if is_translation_table(node) {
        if state.words.is_none() {
            state.words = Some(walk_table(node, site_root));
        } else {
            debug!("additional translation table ignored");
        }
        return;
    }
    if is_tooltip(node) {
        if let Some(link) = extract_link(node, site_root) {
            state.links.push(link);
        }
        return;
    }
    for child in node.children() {
        walk(child, site_root, state);
    }
}

/// The translation table is recognized by its structural signature; the
/// site does not tag it with a class.
fn is_translation_table(node: DomNode<'_>) -> bool {
    is_element(node, "table") && attr(node, "width") == Some("100%")
}

fn is_tooltip(node: DomNode<'_>) -> bool {
    (is_element(node, "div") || is_element(node, "span")) && has_class(node, "tooltip")
}

/// Pull the pagination link out of a tooltip container. A container whose
/// first element child is not an anchor yields nothing.
fn extract_link(container: DomNode<'_>, site_root: &Url) -> Option<PageLink> {
    let anchor = first_element_child(container).filter(|n| is_element(*n, "a"))?;
    let label = text_contents(anchor);
    let url = absolute_href(anchor, site_root);
    if label.is_empty() || url.is_empty() {
        return None;
    }
    Some(PageLink { label, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_root() -> Url {
        Url::parse("https://www.multitran.com/").unwrap()
    }

    fn parse(markup: &str) -> ParsedPage {
        let html = Html::parse_document(markup);
        parse_document(&html, "https://www.multitran.com/m.exe?s=q", &site_root())
    }

    const PAGE: &str = r#"
        <html><body>
          <div class="middle">
            <div class="tooltip"><a href="/m.exe?s=translation">translation</a></div>
            <div class="tooltip"><a href="/m.exe?s=library">library</a></div>
            <table width="100%">
              <tr><td class="gray"><a href="/m.exe?s=translation">translation</a></td></tr>
              <tr><td class="subj"><a href="/t">gen.</a></td>
                  <td class="trans"><a href="/a">rendering</a></td></tr>
            </table>
          </div>
        </body></html>"#;

    #[test]
    fn finds_table_and_links_anywhere_in_the_tree() {
        let page = parse(PAGE);
        assert_eq!(page.list.words.len(), 1);
        assert_eq!(page.list.link, "https://www.multitran.com/m.exe?s=q");
        let labels: Vec<&str> = page.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["translation", "library"]);
        assert_eq!(page.links[0].url, "https://www.multitran.com/m.exe?s=translation");
    }

    #[test]
    fn page_without_table_is_an_empty_result() {
        let page = parse("<html><body><p>nothing found</p></body></html>");
        assert!(page.list.words.is_empty());
        assert!(page.links.is_empty());
    }

    #[test]
    fn tooltip_without_anchor_yields_no_link() {
        let page = parse(
            r#"<body>
                 <div class="tooltip">plain text</div>
                 <div class="tooltip"><b>bold</b><a href="/x">late anchor</a></div>
               </body>"#,
        );
        assert!(page.links.is_empty());
    }

    #[test]
    fn matched_subtrees_are_not_descended_into() {
        // A tooltip nested inside the translation table must not be
        // collected: the walk stops at the table.
        let page = parse(
            r#"<body>
                 <table width="100%">
                   <tr><td class="gray"><a href="/w">word</a>
                     <div class="tooltip"><a href="/hidden">hidden</a></div>
                   </td></tr>
                 </table>
               </body>"#,
        );
        assert_eq!(page.list.words.len(), 1);
        assert!(page.links.is_empty());
    }

    #[test]
    fn only_the_first_table_is_used() {
        let page = parse(
            r#"<body>
                 <table width="100%">
                   <tr><td class="gray"><a href="/w">first</a></td></tr>
                 </table>
                 <table width="100%">
                   <tr><td class="gray"><a href="/w">second</a></td></tr>
                 </table>
               </body>"#,
        );
        assert_eq!(page.list.words.len(), 1);
        assert_eq!(page.list.words[0].word, "first");
    }

    #[test]
    fn parsing_is_idempotent() {
        let html = Html::parse_document(PAGE);
        let a = parse_document(&html, "u", &site_root());
        let b = parse_document(&html, "u", &site_root());
        assert_eq!(a.list, b.list);
        assert_eq!(a.links, b.links);
    }
}
