//! Translation-table walker
//!
//! Groups the rows of the translation table under the headword they belong
//! to. A headword row opens a new word group; meaning rows accumulate into
//! the open group; the group is flushed when the next headword row (or the
//! end of the table) is reached. Row classification is explicit so the
//! permissive skipping stays auditable: every row is either matched,
//! skipped, or malformed.

use tracing::debug;
use url::Url;

use crate::domain::Word;
use crate::parsing::entry::{build_meaning, build_word};
use crate::parsing::node::{has_class, is_element, DomNode};

/// A row recognized by the walker.
pub enum RowKind<'a> {
    /// Headword row; carries the headword cell.
    Word(DomNode<'a>),
    /// Translation line belonging to the current headword.
    Meaning(DomNode<'a>),
}

/// Per-row classification outcome.
pub enum RowOutcome<'a> {
    Matched(RowKind<'a>),
    /// Row carries neither marker. Not an error; the table mixes in
    /// spacer and navigation rows.
    Skipped,
    /// Row carries a marker but lacks the structure that must accompany
    /// it. Logged and skipped.
    Malformed(&'static str),
}

/// Classify one table row by its cell markers.
pub fn classify_row(row: DomNode<'_>) -> RowOutcome<'_> {
    let cells: Vec<DomNode<'_>> = row.children().filter(|c| is_element(*c, "td")).collect();

    if let Some(gray) = cells.iter().find(|c| has_class(**c, "gray")) {
        if gray.descendants().any(|n| is_element(n, "a")) {
            return RowOutcome::Matched(RowKind::Word(*gray));
        }
        return RowOutcome::Malformed("headword cell without an anchor");
    }

    if cells.iter().any(|c| has_class(*c, "subj")) {
        if cells.iter().any(|c| has_class(*c, "trans")) {
            return RowOutcome::Matched(RowKind::Meaning(row));
        }
        return RowOutcome::Malformed("subject cell without a translation cell");
    }

    RowOutcome::Skipped
}

/// Walk the translation table and return its words in page order.
pub fn walk_table(table: DomNode<'_>, site_root: &Url) -> Vec<Word> {
    // The parser inserts a tbody even when the markup omits it, but fall
    // back to the table itself just in case.
    let row_group = table
        .children()
        .find(|c| is_element(*c, "tbody"))
        .unwrap_or(table);

    let mut words = Vec::new();
    let mut current: Option<Word> = None;

    for row in row_group.children().filter(|c| is_element(*c, "tr")) {
        match classify_row(row) {
            RowOutcome::Matched(RowKind::Word(cell)) => {
                flush(&mut current, &mut words);
                current = Some(build_word(cell, site_root));
            }
            RowOutcome::Matched(RowKind::Meaning(row)) => {
                if let Some(word) = current.as_mut() {
                    word.meanings.push(build_meaning(row, site_root));
                } else {
                    debug!("meaning row before any headword row, skipping");
                }
            }
            RowOutcome::Skipped => {}
            RowOutcome::Malformed(reason) => {
                debug!(reason, "skipping malformed table row");
            }
        }
    }
    flush(&mut current, &mut words);

    words
}

fn flush(current: &mut Option<Word>, words: &mut Vec<Word>) {
    if let Some(word) = current.take() {
        if !word.is_empty() {
            words.push(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn site_root() -> Url {
        Url::parse("https://www.multitran.com/").unwrap()
    }

    fn find_table(html: &Html) -> DomNode<'_> {
        html.tree
            .root()
            .descendants()
            .find(|n| is_element(*n, "table"))
            .expect("table not found in fixture")
    }

    const TWO_WORDS: &str = r#"
        <table width="100%">
          <tr><td class="gray"><a href="/m.exe?s=number">number</a>
              <a href="/p" title="noun">n.</a></td></tr>
          <tr><td class="subj"><a href="/t1" title="General">gen.</a></td>
              <td class="trans"><a href="/a">figure</a>; <a href="/b">digit</a></td></tr>
          <tr><td class="subj"><a href="/t2" title="Mathematics">math.</a></td>
              <td class="trans"><a href="/c">numeral</a></td></tr>
          <tr><td class="gray"><a href="/m.exe?s=date">date</a></td></tr>
          <tr><td class="subj"><a href="/t3" title="General">gen.</a></td>
              <td class="trans"><a href="/d">day</a></td></tr>
        </table>"#;

    #[test]
    fn rows_group_under_their_headword() {
        let html = Html::parse_document(TWO_WORDS);
        let words = walk_table(find_table(&html), &site_root());
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "number");
        assert_eq!(words[0].meanings.len(), 2);
        assert_eq!(words[0].meanings[0].words[0].word, "figure");
        assert_eq!(words[1].word, "date");
        assert_eq!(words[1].meanings.len(), 1);
    }

    #[test]
    fn meanings_preserve_page_order() {
        let html = Html::parse_document(TWO_WORDS);
        let words = walk_table(find_table(&html), &site_root());
        let topics: Vec<&str> = words[0]
            .meanings
            .iter()
            .map(|m| m.topic.as_str())
            .collect();
        assert_eq!(topics, ["gen.", "math."]);
    }

    #[test]
    fn unrecognized_rows_are_skipped() {
        let html = Html::parse_document(
            r#"<table width="100%">
                 <tr><td>navigation junk</td></tr>
                 <tr><td class="gray"><a href="/w">word</a></td></tr>
                 <tr><td colspan="2">spacer</td></tr>
                 <tr><td class="subj"><a href="/t">gen.</a></td>
                     <td class="trans"><a href="/a">term</a></td></tr>
               </table>"#,
        );
        let words = walk_table(find_table(&html), &site_root());
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].meanings.len(), 1);
    }

    #[test]
    fn malformed_rows_do_not_abort_the_table() {
        let html = Html::parse_document(
            r#"<table width="100%">
                 <tr><td class="gray">no anchor here</td></tr>
                 <tr><td class="gray"><a href="/w">word</a></td></tr>
                 <tr><td class="subj"><a href="/t">gen.</a></td></tr>
                 <tr><td class="subj"><a href="/t">gen.</a></td>
                     <td class="trans"><a href="/a">term</a></td></tr>
               </table>"#,
        );
        let words = walk_table(find_table(&html), &site_root());
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "word");
        assert_eq!(words[0].meanings.len(), 1);
    }

    #[test]
    fn empty_table_yields_no_words() {
        let html = Html::parse_document(r#"<table width="100%"><tr><td>nothing</td></tr></table>"#);
        assert!(walk_table(find_table(&html), &site_root()).is_empty());
    }
}
