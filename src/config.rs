//! Configuration types.

use std::time::Duration;

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Destination push endpoint URL.
    pub endpoint_url: String,
    /// Per-request timeout applied to the HTTP client.
    pub request_timeout: Duration,
    /// User-Agent header for outbound requests.
    pub user_agent: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("push-relay/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RelayConfig {
    /// Config pointed at the given endpoint, defaults elsewhere.
    pub fn for_endpoint(url: impl Into<String>) -> Self {
        Self {
            endpoint_url: url.into(),
            ..Self::default()
        }
    }
}
