//! HTTP client abstraction for backend API requests.

use reqwest::{
    Client, Method,
    header::{ACCEPT, CONTENT_TYPE},
};
use std::time::Duration;

use crate::domain::DashError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User agent sent with every request
const USER_AGENT: &str = concat!("subdash/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    ///
    /// # Errors
    ///
    /// Returns `DashError::Network` if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, DashError> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `DashError::Network` if the TLS backend cannot be initialised.
    pub fn with_config(config: HttpConfig) -> Result<Self, DashError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }

    /// Build a JSON request with standard headers
    pub fn json_request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }

    /// Build a plain GET request (no JSON headers) for raw downloads
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            HttpConfig::default().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert!(HttpClient::with_config(HttpConfig {
            timeout: Duration::from_secs(3)
        })
        .is_ok());
    }

    #[test]
    fn test_json_request_headers() {
        let client = HttpClient::new().unwrap();
        let request = client
            .json_request(Method::POST, "http://localhost/api")
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
