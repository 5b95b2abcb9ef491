//! Error types for query validation, transport, and markup parsing
//!
//! Input-validation errors (`EmptyQuery`, `InvalidLanguage`) are surfaced
//! before any network I/O. `Fetch`/`Parse` errors on the first result page
//! abort the whole query; the same errors on pagination-discovered pages are
//! downgraded to warnings by the client and never propagate.

use thiserror::Error;

/// What went wrong while fetching one page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query text is empty")]
    EmptyQuery,

    #[error("unsupported language: '{name}'")]
    InvalidLanguage { name: String },

    #[error("failed to fetch {url}: {kind}")]
    Fetch { url: String, kind: FetchErrorKind },

    #[error("failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("invalid client configuration: {message}")]
    Configuration { message: String },
}

impl QueryError {
    pub fn invalid_language(name: &str) -> Self {
        Self::InvalidLanguage {
            name: name.to_string(),
        }
    }

    pub fn fetch(url: &str, kind: FetchErrorKind) -> Self {
        Self::Fetch {
            url: url.to_string(),
            kind,
        }
    }

    pub fn status(url: &str, status: u16) -> Self {
        Self::fetch(url, FetchErrorKind::Status(status))
    }

    pub fn parse(url: &str, reason: &str) -> Self {
        Self::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn configuration(message: &str) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    /// Whether this error is tolerable on a pagination-discovered page.
    ///
    /// Validation and configuration errors always abort; transport and
    /// parse failures only abort when they hit the primary page.
    pub fn is_page_local(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Parse { .. })
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
