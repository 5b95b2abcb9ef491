//! HTTP transport for result pages
//!
//! [`PageFetcher`] is the seam between the client and the network; tests
//! substitute a canned-fixture implementation. [`HttpClient`] is the real
//! transport: a rate-limited `reqwest` client with a desktop user agent and
//! a per-request timeout.

use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{FetchErrorKind, QueryError};

/// Fetches one page body by URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, QueryError>;
}

/// Rate-limited HTTP transport over `reqwest`.
pub struct HttpClient {
    client: Client,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| QueryError::configuration("user agent is not a valid header value"))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| QueryError::configuration(&format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests_per_second)
                .ok_or_else(|| QueryError::configuration("request rate must be greater than 0"))?,
        );

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(quota),
        })
    }

    fn fetch_error(url: &str, err: &reqwest::Error) -> QueryError {
        let kind = if err.is_timeout() {
            FetchErrorKind::Timeout
        } else {
            FetchErrorKind::Transport(err.to_string())
        };
        QueryError::fetch(url, kind)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, QueryError> {
        self.rate_limiter.until_ready().await;

        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::fetch_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::fetch_error(url, &e))?;

        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
