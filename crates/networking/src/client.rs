//! HTTP client for short-link expansion
//!
//! The client issues a single GET request with redirect-following enabled and
//! reports the effective URL of the final response. There is no retry layer:
//! a failed request is returned to the caller as-is.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client as ReqwestClient};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while following a redirect chain
///
/// The `Display` output of the transport variants is the underlying client
/// message with no prefix, so callers can embed it in their own wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Transport failure (connection refused, DNS, TLS, malformed URL)
    #[error("{0}")]
    Request(String),

    /// The request did not complete within the configured timeout
    #[error("{0}")]
    Timeout(String),

    /// The redirect chain exceeded the configured limit
    #[error("{0}")]
    TooManyRedirects(String),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl NetworkError {
    /// Check if this error was caused by a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Timeout(_))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout(err.to_string())
        } else if err.is_redirect() {
            NetworkError::TooManyRedirects(err.to_string())
        } else {
            NetworkError::Request(err.to_string())
        }
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Default redirect limit, matching what browsers' fetch allows
pub const DEFAULT_MAX_REDIRECTS: usize = 20;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout; `None` leaves the client without one
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("gmaps-embed/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the redirect limit
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

// =============================================================================
// Redirect Resolution
// =============================================================================

/// Something that can turn a URL into the final URL of its redirect chain
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    /// Issue one GET request, follow redirects, and return the effective URL
    /// of the final response.
    ///
    /// HTTP error statuses are not failures here; only transport-level
    /// problems produce an error.
    async fn resolve_redirects(&self, url: &str) -> Result<String, NetworkError>;
}

#[async_trait]
impl<T: RedirectResolver + ?Sized> RedirectResolver for Arc<T> {
    async fn resolve_redirects(&self, url: &str) -> Result<String, NetworkError> {
        (**self).resolve_redirects(url).await
    }
}

/// reqwest-backed HTTP client
///
/// # Examples
/// ```
/// use networking::{ClientConfig, HttpClient, RedirectResolver};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpClient::new(ClientConfig::default())?;
///     let long_url = client
///         .resolve_redirects("https://maps.app.goo.gl/DLjNeKAkKsrJsvao7")
///         .await?;
///     println!("Resolved to {}", long_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// HTTP client
    client: ReqwestClient,
    /// Configuration
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self, NetworkError> {
        let mut builder = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(config.max_redirects));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| NetworkError::Build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RedirectResolver for HttpClient {
    async fn resolve_redirects(&self, url: &str) -> Result<String, NetworkError> {
        debug!(url, "Following redirects");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            debug!(%status, final_url = %final_url, "Redirect chain ended with non-success status");
        }
        debug!(url, final_url = %final_url, "Redirects resolved");

        Ok(final_url)
    }
}

// =============================================================================
// Tests
// =============================================================================
