//! Output rendering
//!
//! Consumers of the query result, not part of the extraction engine: an
//! aligned-column plaintext table for terminals and a JSON form with the
//! model's field names.

use std::fmt::Write as _;

use crate::domain::{MeaningWord, Word, WordList};

/// Render all pages as JSON.
pub fn render_json(pages: &[WordList]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(pages)
}

/// Render all pages as an aligned plaintext table.
///
/// The topic column is right-aligned to the longest topic label across
/// all pages, measured in characters.
pub fn render_plain(pages: &[WordList]) -> String {
    let width = max_topic_len(pages);
    let mut out = String::new();

    for list in pages {
        let bar = "=".repeat(list.query.chars().count());
        let _ = writeln!(out, " {bar}");
        let _ = writeln!(out, " {}", list.query);
        let _ = writeln!(out, " {bar}");
        for word in &list.words {
            render_word(&mut out, word, width);
        }
        out.push('\n');
    }

    out
}

/// Longest topic label across all pages, in characters. Zero when there
/// are no meanings at all.
fn max_topic_len(pages: &[WordList]) -> usize {
    pages
        .iter()
        .flat_map(|list| &list.words)
        .flat_map(|word| &word.meanings)
        .map(|meaning| meaning.topic.chars().count())
        .max()
        .unwrap_or(0)
}

fn render_word(out: &mut String, word: &Word, width: usize) {
    let heading = heading(word);
    let _ = writeln!(out, " {heading}");
    let _ = writeln!(out, " {}", "-".repeat(heading.chars().count()));
    for meaning in &word.meanings {
        let terms: Vec<String> = meaning.words.iter().map(term_text).collect();
        let _ = writeln!(out, " {:>width$}  {}", meaning.topic, terms.join(", "));
    }
}

/// Headline for one word: pre-context, headword, post-context, phonetic
/// spelling and part of speech, whichever of them are present.
fn heading(word: &Word) -> String {
    let mut parts = Vec::new();
    if let Some(pre) = &word.pre {
        parts.push(pre.clone());
    }
    parts.push(word.word.clone());
    if let Some(post) = &word.post {
        parts.push(post.clone());
    }
    if let Some(phonetic) = &word.phonetic {
        parts.push(format!("[{phonetic}]"));
    }
    if let Some(part) = &word.part {
        parts.push(part.clone());
    }
    parts.join(" ")
}

fn term_text(word: &MeaningWord) -> String {
    match &word.add {
        Some(add) => format!("{} ({})", word.word, add),
        None => word.word.clone(),
    }
}
