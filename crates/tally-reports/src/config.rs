//! Client configuration.

use std::time::Duration;

use crate::status::StatusPolicy;

/// Configuration for a [`ReportsClient`](crate::ReportsClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Overall timeout applied to every request.
    pub timeout: Duration,
    /// Accepted-status sets.
    pub status: StatusPolicy,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and status sets.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            status: StatusPolicy::default(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the accepted-status sets.
    #[must_use]
    pub fn with_status_policy(mut self, status: StatusPolicy) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:4242/");
        assert_eq!(config.base_url, "http://localhost:4242");
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ClientConfig::new("http://localhost:4242")
            .with_timeout(Duration::from_secs(5))
            .with_status_policy(StatusPolicy::new(vec![200], vec![200]));

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.status.accepts(reqwest::StatusCode::BAD_REQUEST));
    }
}
