//! Supported languages and their numeric site codes
//!
//! The site identifies languages by numeric codes in the `l1`/`l2` query
//! parameters. The set is closed; unknown names are rejected before any
//! network call.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::QueryError;

/// A language supported by the dictionary service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Russian,
    German,
    French,
    Spanish,
    Italian,
    Dutch,
    Estonian,
    Latvian,
    Japanese,
    Afrikaans,
    Esperanto,
    Kalmyk,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 13] = [
        Language::English,
        Language::Russian,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Dutch,
        Language::Estonian,
        Language::Latvian,
        Language::Japanese,
        Language::Afrikaans,
        Language::Esperanto,
        Language::Kalmyk,
    ];

    /// Numeric code used by the site.
    pub fn code(self) -> u32 {
        match self {
            Language::English => 1,
            Language::Russian => 2,
            Language::German => 3,
            Language::French => 4,
            Language::Spanish => 5,
            Language::Italian => 23,
            Language::Dutch => 24,
            Language::Estonian => 26,
            Language::Latvian => 27,
            Language::Japanese => 28,
            Language::Afrikaans => 31,
            Language::Esperanto => 34,
            Language::Kalmyk => 35,
        }
    }

    /// Lowercase English name, as accepted by [`Language::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Dutch => "dutch",
            Language::Estonian => "estonian",
            Language::Latvian => "latvian",
            Language::Japanese => "japanese",
            Language::Afrikaans => "afrikaans",
            Language::Esperanto => "esperanto",
            Language::Kalmyk => "kalmyk",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == lowered)
            .ok_or_else(|| QueryError::invalid_language(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("english", Language::English, 1)]
    #[case("Russian", Language::Russian, 2)]
    #[case("  kalmyk ", Language::Kalmyk, 35)]
    #[case("ESPERANTO", Language::Esperanto, 34)]
    fn parses_known_names(#[case] input: &str, #[case] lang: Language, #[case] code: u32) {
        let parsed: Language = input.parse().unwrap();
        assert_eq!(parsed, lang);
        assert_eq!(parsed.code(), code);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidLanguage {
                name: "klingon".to_string()
            }
        );
    }

    #[test]
    fn all_codes_are_distinct() {
        let mut codes: Vec<u32> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }
}
