//! Client configuration
//!
//! Base domain, search endpoint, and transport knobs as one immutable
//! value, created at startup and passed into the client. Nothing here is
//! mutated at runtime.

use std::time::Duration;

use serde::Serialize;

/// Configuration for [`crate::client::MtrnClient`].
#[derive(Debug, Clone, Serialize)]
pub struct ClientConfig {
    /// Search endpoint URL, receives the `l1`/`l2`/`s` query parameters.
    pub search_url: String,

    /// Site root used to resolve relative hrefs found in result markup.
    pub site_root: String,

    /// User agent sent with every request. The site serves a mobile markup
    /// variant to unknown agents and the parser only targets the desktop
    /// variant, so a desktop agent string is required.
    pub user_agent: String,

    /// Per-request timeout. Expiry surfaces as a fetch error.
    pub timeout: Duration,

    /// Upper bound on request rate while following pagination links.
    pub max_requests_per_second: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: "https://www.multitran.com/m.exe".to_string(),
            site_root: "https://www.multitran.com/".to_string(),
            user_agent: "Mozilla/5.0 Firefox/75.0".to_string(),
            timeout: Duration::from_secs(30),
            max_requests_per_second: 4,
        }
    }
}
