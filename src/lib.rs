//! Client library for the multitran.ru online dictionary.
//!
//! The site resolves each part of a query independently: the response for
//! the first part carries links to pages answering the remaining parts.
//! This crate fetches the first page, extracts the translation table, then
//! follows the discovered links and returns one [`domain::WordList`] per
//! query part, in the order the site presented them.
//!
//! How the model maps to the site:
//!
//! ```text
//! Meaning - one line of translations in a specific topic.
//!   eng.    | chain; complex; structure; integer (essence)
//!   ^ topic   ^ MeaningWord
//!
//! MeaningWord - one term from a Meaning line.
//!   integer (essence)
//!   ^ word   ^ add
//!
//! Word - a headword with its meanings.
//!   число n.                       // Word.word, Word.part
//!      genet.  number; date       // Meaning
//!      autom.  digit              // Meaning
//!
//! WordList - one part of the query with its words.
//!   числа                          // WordList.query
//!     число, ...                   // WordList.words
//! ```
//!
//! The markup targeted here is one specific, evolving dialect that was
//! never meant for machine parsing; when the site changes, the engine in
//! [`parsing`] is expected to need re-tuning.
//!
//! # Example
//!
//! ```no_run
//! use mtrn::{ClientConfig, Language, MtrnClient};
//!
//! # async fn run() -> Result<(), mtrn::QueryError> {
//! let client = MtrnClient::new(ClientConfig::default())?;
//! let outcome = client
//!     .query("translation library", Language::English, Language::Russian)
//!     .await?;
//! for page in &outcome.pages {
//!     println!("{}: {} words", page.query, page.words.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod language;
pub mod parsing;
pub mod render;

pub use client::{MtrnClient, PageWarning, QueryOutcome};
pub use config::ClientConfig;
pub use domain::{Attribution, Meaning, MeaningWord, PageLink, Word, WordList};
pub use error::{FetchErrorKind, QueryError};
pub use fetch::{HttpClient, PageFetcher};
pub use language::Language;
