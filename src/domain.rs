//! Result model for dictionary queries
//!
//! The model mirrors how the site lays out a result page:
//!
//! ```text
//! WordList            one page, answering one part of the query
//!   Word              headword with optional part-of-speech and context
//!     Meaning         one topic-tagged line of translations
//!       MeaningWord   a single translated term, possibly annotated
//! ```
//!
//! All entities are built once during a single parsing pass and never
//! mutated afterwards. Ordering is significant everywhere: meanings keep
//! the order they appear on the page, and so do meaning words.

use serde::Serialize;

/// Identification of the contributor who supplied a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    /// Contributor name as displayed on the site.
    pub name: String,

    /// Absolute link to the contributor page.
    pub link: String,

    /// Tooltip text attached to the contributor link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One translated term inside a [`Meaning`] line.
///
/// The link may not open without a multitran.ru referer; it is kept as an
/// opaque reference and never fetched by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeaningWord {
    /// Term text.
    pub word: String,

    /// Absolute link to the term page.
    pub link: String,

    /// Additional annotation, stored without the site's surrounding
    /// parentheses (`"(rare)"` is stored as `"rare"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<String>,

    /// Contributor attribution, when the annotation carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator: Option<Attribution>,
}

/// One line of translations qualified by a subject topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meaning {
    /// Translated terms in page order.
    pub words: Vec<MeaningWord>,

    /// Short subject label (e.g. a field of use).
    pub topic: String,

    /// Absolute link to the full topic listing.
    pub link: String,

    /// Expanded topic name from the subject tooltip, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A headword together with all of its meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Meanings in page order.
    pub meanings: Vec<Meaning>,

    /// Headword text.
    pub word: String,

    /// Absolute link to the headword page.
    pub link: String,

    /// Part-of-speech tag, when the site shows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,

    /// Disambiguating text before the headword. Independent of `post`
    /// and `phonetic`; any subset may be absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre: Option<String>,

    /// Disambiguating text after the headword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,

    /// Phonetic spelling, stored without the `[...]` delimiters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
}

impl Word {
    pub(crate) fn is_empty(&self) -> bool {
        self.word.is_empty() && self.meanings.is_empty()
    }
}

/// The result for one part of the query: all words found on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordList {
    /// Words in page order.
    pub words: Vec<Word>,

    /// The literal query part this page answers. Either the label the site
    /// assigned when splitting the query, or the raw input query when the
    /// site did not split it.
    pub query: String,

    /// URL this page was fetched from.
    pub link: String,
}

/// Link to a page holding results for another part of the query.
///
/// Transient: consumed by the client while following pagination and never
/// exposed in the final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// The query part the linked page answers.
    pub label: String,

    /// Absolute URL of the linked page.
    pub url: String,
}
