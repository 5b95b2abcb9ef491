//! Query client
//!
//! Runs one dictionary query end to end: build the search URL, fetch and
//! parse the first page, then follow the pagination links the site emits
//! when it splits the query into several parts. The phases are strictly
//! sequential (later parts are only discoverable from the first response)
//! and the output keeps link-discovery order.
//!
//! Failure policy: a failure on the first page fails the whole query; a
//! failure on any pagination-discovered page is recorded as a warning and
//! that part is omitted from the result.

use scraper::Html;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::domain::WordList;
use crate::error::QueryError;
use crate::fetch::{HttpClient, PageFetcher};
use crate::language::Language;
use crate::parsing::{parse_document, ParsedPage};

/// A secondary page that failed to fetch or parse.
#[derive(Debug, Clone, Serialize)]
pub struct PageWarning {
    /// The query part whose page failed.
    pub label: String,

    /// URL of the failed page.
    pub url: String,

    /// Human-readable failure description.
    pub error: String,
}

/// Result of one query: one [`WordList`] per successfully fetched query
/// part, in the order the site presented them, plus warnings for the
/// parts that failed.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub pages: Vec<WordList>,
    pub warnings: Vec<PageWarning>,
}

/// Client for the dictionary service, generic over the page transport so
/// tests can run against canned fixtures.
pub struct MtrnClient<F: PageFetcher = HttpClient> {
    fetcher: F,
    config: ClientConfig,
    site_root: Url,
}

impl MtrnClient<HttpClient> {
    /// Create a client backed by the real HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        let fetcher = HttpClient::new(&config)?;
        Self::with_fetcher(fetcher, config)
    }
}

impl<F: PageFetcher> MtrnClient<F> {
    /// Create a client with a custom transport.
    pub fn with_fetcher(fetcher: F, config: ClientConfig) -> Result<Self, QueryError> {
        let site_root = Url::parse(&config.site_root)
            .map_err(|e| QueryError::configuration(&format!("invalid site root: {e}")))?;
        Ok(Self {
            fetcher,
            config,
            site_root,
        })
    }

    /// Build the search URL for a query.
    pub fn search_url(&self, query: &str, from: Language, to: Language) -> Result<String, QueryError> {
        let url = Url::parse_with_params(
            &self.config.search_url,
            &[
                ("l1", from.code().to_string()),
                ("l2", to.code().to_string()),
                ("s", query.to_string()),
            ],
        )
        .map_err(|e| QueryError::configuration(&format!("invalid search url: {e}")))?;
        Ok(url.to_string())
    }

    /// Run one query.
    ///
    /// The first result page is segment 0. When the site split the query,
    /// its own label for segment 0 is `links[0]` and the remaining links
    /// supply the other segments; when it did not, the raw input query is
    /// the label.
    pub async fn query(
        &self,
        query: &str,
        from: Language,
        to: Language,
    ) -> Result<QueryOutcome, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let url = self.search_url(query, from, to)?;
        debug!(query, %from, %to, "running dictionary query");

        let ParsedPage { mut list, links } = self.fetch_page(&url).await?;
        list.query = match links.first() {
            Some(first) => first.label.clone(),
            None => query.to_string(),
        };

        let mut pages = vec![list];
        let mut warnings = Vec::new();

        for link in links.iter().skip(1) {
            match self.fetch_page(&link.url).await {
                Ok(mut page) => {
                    page.list.query = link.label.clone();
                    pages.push(page.list);
                }
                // Only fetch/parse failures are local to one page;
                // anything else would fail every remaining page too.
                Err(err) if err.is_page_local() => {
                    warn!(label = %link.label, url = %link.url, %err,
                          "failed to fetch query part, skipping");
                    warnings.push(PageWarning {
                        label: link.label.clone(),
                        url: link.url.clone(),
                        error: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(QueryOutcome { pages, warnings })
    }

    async fn fetch_page(&self, url: &str) -> Result<ParsedPage, QueryError> {
        let body = self.fetcher.fetch(url).await?;
        if body.trim().is_empty() {
            return Err(QueryError::parse(url, "empty response body"));
        }
        let html = Html::parse_document(&body);
        Ok(parse_document(&html, url, &self.site_root))
    }
}
