use reqwest::header::HeaderValue;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by every request a `JokeClient` makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the joke service, without a trailing slash.
    pub base_url: String,
    /// Value sent in the `Accept` header.
    pub accept: HeaderValue,
    /// Upper bound on one round trip, body included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept: HeaderValue::from_static("application/json"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
