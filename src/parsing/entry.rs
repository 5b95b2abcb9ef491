//! Builders turning runs of sibling nodes into result entries
//!
//! Three builders cover the three entry shapes on a result page: the
//! headword cell, the subject cell, and the translations cell. They never
//! fail; a malformed shape produces a partial record with the unrecognized
//! fields left empty.

use url::Url;

use crate::domain::{Attribution, Meaning, MeaningWord, Word};
use crate::parsing::node::{
    absolute_href, attr, has_class, is_element, text_contents, DomNode,
};

/// Build a [`Word`] from the children of a headword cell.
///
/// The cell mixes anchors and inline spans in no fixed order. An anchor
/// carrying a `title` attribute is the part-of-speech tag; the first plain
/// anchor is the headword itself. Spans are classified by position: a
/// `[...]`-delimited span is the phonetic spelling, any other span is
/// pre-context until the headword has been seen and post-context after.
pub fn build_word(cell: DomNode<'_>, site_root: &Url) -> Word {
    let mut word = Word {
        meanings: Vec::new(),
        word: String::new(),
        link: String::new(),
        part: None,
        pre: None,
        post: None,
        phonetic: None,
    };

    for child in cell.children() {
        if is_element(child, "a") {
            let text = text_contents(child);
            if attr(child, "title").is_some() {
                if word.part.is_none() && !text.is_empty() {
                    word.part = Some(text);
                }
            } else if word.word.is_empty() && !text.is_empty() {
                word.word = text;
                word.link = absolute_href(child, site_root);
            }
        } else if is_element(child, "span") {
            let text = text_contents(child);
            if text.is_empty() {
                continue;
            }
            if let Some(inner) = bracketed(&text) {
                if word.phonetic.is_none() && !inner.is_empty() {
                    word.phonetic = Some(inner.to_string());
                }
            } else if word.word.is_empty() {
                append_context(&mut word.pre, &text);
            } else {
                append_context(&mut word.post, &text);
            }
        }
    }

    word
}

/// Build a [`Meaning`] from a result row holding a subject cell and a
/// translations cell.
pub fn build_meaning(row: DomNode<'_>, site_root: &Url) -> Meaning {
    let mut meaning = Meaning {
        words: Vec::new(),
        topic: String::new(),
        link: String::new(),
        title: None,
    };

    for cell in row.children().filter(|c| is_element(*c, "td")) {
        if has_class(cell, "subj") {
            if let Some(anchor) = cell.descendants().find(|n| is_element(*n, "a")) {
                meaning.topic = text_contents(anchor);
                meaning.link = absolute_href(anchor, site_root);
                meaning.title = attr(anchor, "title").map(str::to_string);
            } else {
                // Degrade: plain-text subject cell without a topic link.
                meaning.topic = text_contents(cell);
            }
        } else if has_class(cell, "trans") {
            meaning.words = build_meaning_words(cell, site_root);
        }
    }

    meaning
}

/// Build the [`MeaningWord`] sequence from the children of a translations
/// cell.
///
/// Terms are separated by literal `;` text nodes. Within one segment the
/// first anchor supplies term text and link; a gray span supplies the
/// annotation, which may itself nest an attribution anchor. Segments
/// without term text are dropped.
pub fn build_meaning_words(cell: DomNode<'_>, site_root: &Url) -> Vec<MeaningWord> {
    let mut words = Vec::new();
    let mut current = Segment::default();

    for child in cell.children() {
        if let Some(text) = child.value().as_text() {
            if text.contains(';') {
                current.flush_into(&mut words);
            }
            continue;
        }
        if is_element(child, "a") {
            if current.word.is_empty() {
                current.word = text_contents(child);
                current.link = absolute_href(child, site_root);
            }
        } else if is_element(child, "span") && has_class(child, "gray") {
            let (add, translator) = build_annotation(child, site_root);
            if current.add.is_none() {
                current.add = add;
            }
            if current.translator.is_none() {
                current.translator = translator;
            }
        }
    }
    current.flush_into(&mut words);

    words
}

/// Split an annotation span into plain annotation text and an optional
/// attribution. Plain text stays in the annotation (parenthesis decoration
/// stripped); a nested anchor is the attribution.
fn build_annotation(span: DomNode<'_>, site_root: &Url) -> (Option<String>, Option<Attribution>) {
    let mut add = String::new();
    let mut translator = None;

    for child in span.children() {
        if let Some(text) = child.value().as_text() {
            push_fragment(&mut add, text);
            continue;
        }
        if !child.value().is_element() {
            continue;
        }
        let anchor = if is_element(child, "a") {
            Some(child)
        } else {
            child.descendants().find(|n| is_element(*n, "a"))
        };
        match anchor {
            Some(anchor) if translator.is_none() => {
                translator = Some(Attribution {
                    name: text_contents(anchor),
                    link: absolute_href(anchor, site_root),
                    title: attr(anchor, "title").map(str::to_string),
                });
            }
            Some(_) => {}
            None => push_fragment(&mut add, &text_contents(child)),
        }
    }

    (strip_decoration(&add), translator)
}

/// Accumulator for one semicolon-delimited segment of a translations cell.
#[derive(Default)]
struct Segment {
    word: String,
    link: String,
    add: Option<String>,
    translator: Option<Attribution>,
}

impl Segment {
    fn flush_into(&mut self, words: &mut Vec<MeaningWord>) {
        let segment = std::mem::take(self);
        if !segment.word.is_empty() {
            words.push(MeaningWord {
                word: segment.word,
                link: segment.link,
                add: segment.add,
                translator: segment.translator,
            });
        }
    }
}

/// Strip the site's parenthesis decoration from annotation text.
fn strip_decoration(raw: &str) -> Option<String> {
    let mut text = raw.trim();
    if text.starts_with('(') && text.ends_with(')') && text.len() >= 2 {
        text = text[1..text.len() - 1].trim();
    }
    (!text.is_empty()).then(|| text.to_string())
}

/// Inner text of a `[...]`-delimited fragment, if it is one.
fn bracketed(text: &str) -> Option<&str> {
    text.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

fn append_context(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(text);
        }
        None => *slot = Some(text.to_string()),
    }
}

fn push_fragment(buf: &mut String, text: &str) {
    let fragment = text.trim();
    if !fragment.is_empty() {
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(fragment);
    }
}
