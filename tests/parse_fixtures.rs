//! Extraction engine against captured page fixtures, no client involved.

use mtrn::parsing::parse_document;
use mtrn::render;
use scraper::Html;
use url::Url;

fn site_root() -> Url {
    Url::parse("https://www.multitran.com/").unwrap()
}

#[test]
fn parsing_the_same_fixture_twice_is_byte_identical() {
    let html = Html::parse_document(include_str!("fixtures/translation.html"));
    let first = parse_document(&html, "https://www.multitran.com/m.exe?s=q", &site_root());
    let second = parse_document(&html, "https://www.multitran.com/m.exe?s=q", &site_root());

    let a = render::render_json(std::slice::from_ref(&first.list)).unwrap();
    let b = render::render_json(std::slice::from_ref(&second.list)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn links_preserve_document_order() {
    let html = Html::parse_document(include_str!("fixtures/parts_alpha.html"));
    let page = parse_document(&html, "u", &site_root());

    let labels: Vec<&str> = page.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn word_without_phonetic_span_keeps_all_other_fields() {
    let html = Html::parse_document(include_str!("fixtures/library.html"));
    let page = parse_document(&html, "u", &site_root());

    assert_eq!(page.list.words.len(), 1);
    let word = &page.list.words[0];
    assert_eq!(word.word, "library");
    assert_eq!(word.part.as_deref(), Some("n."));
    assert_eq!(word.phonetic, None);
    assert_eq!(word.meanings.len(), 2);
    assert_eq!(word.meanings[1].topic, "IT");
    assert_eq!(
        word.meanings[1].title.as_deref(),
        Some("Information technology")
    );
    assert_eq!(word.meanings[1].words[0].add.as_deref(), Some("программ"));
}

#[test]
fn all_links_in_results_are_absolute() {
    let html = Html::parse_document(include_str!("fixtures/translation.html"));
    let page = parse_document(&html, "u", &site_root());

    for word in &page.list.words {
        assert!(word.link.starts_with("https://www.multitran.com/"));
        for meaning in &word.meanings {
            assert!(meaning.link.starts_with("https://www.multitran.com/"));
            for term in &meaning.words {
                assert!(term.link.starts_with("https://www.multitran.com/"));
            }
        }
    }
    for link in &page.links {
        assert!(link.url.starts_with("https://www.multitran.com/"));
    }
}
