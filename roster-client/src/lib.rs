//! Roster HTTP Client
//!
//! A small, type-safe fetcher for the remote users API.
//!
//! Every fetch is a single GET against the configured base URL. The outcome
//! is resolved into a [`Fetched`] value carrying either the parsed payload or
//! the localized message a page should show; the technical cause is logged
//! and never leaves this crate.
//!
//! # Example
//!
//! ```no_run
//! use roster_client::{ApiClient, UserSource};
//! use roster_core::Fetched;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new("http://localhost:8080".parse()?);
//!
//!     if let Fetched::Success { data: users } = client.list_users().await {
//!         println!("{} users", users.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod locator;
mod users;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use locator::ResourceLocator;
pub use users::UserSource;

use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, StatusCode};
use roster_core::Fetched;
use roster_core::domain::problem::{PROBLEM_JSON, ProblemDetails};
use roster_core::i18n::{Locale, Messages};
use serde::de::DeserializeOwned;
use url::Url;

/// Default revalidation window hinted to upstream caches
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

/// HTTP client for the users API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the API (e.g., "http://localhost:8080")
    base_url: Url,
    /// HTTP client instance
    client: Client,
    /// How long a cached response may be reused
    revalidate: Duration,
    /// Messages used when a fetch fails
    messages: &'static Messages,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Example
    /// ```
    /// use roster_client::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:8080".parse().unwrap());
    /// assert_eq!(client.base_url(), "http://localhost:8080");
    /// ```
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self {
            base_url,
            client,
            revalidate: DEFAULT_REVALIDATE,
            messages: Locale::default().messages(),
        }
    }

    /// Set the revalidation window; zero asks for a fresh response every time
    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    /// Select the language of failure messages
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.messages = locale.messages();
        self
    }

    /// Get the base URL of the API, without trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn revalidate(&self) -> Duration {
        self.revalidate
    }

    /// Build the request URL for a locator
    ///
    /// Segments are appended to any path the base URL already has and are
    /// percent-encoded, so an id can never escape its collection.
    pub fn url_for(&self, locator: &ResourceLocator) -> Result<Url> {
        if let ResourceLocator::Item { id, .. } = locator {
            if id.is_empty() || id == "." || id == ".." {
                return Err(ClientError::InvalidLocator(format!(
                    "unusable id {:?} for {}",
                    id, locator
                )));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidLocator(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(locator.segments());
        Ok(url)
    }

    // =============================================================================
    // Fetching
    // =============================================================================

    /// Fetch a resource and resolve it into what a page renders
    ///
    /// Issues exactly one request; failures are logged and collapsed into a
    /// localized message.
    pub async fn fetch_resource<T: DeserializeOwned>(&self, locator: &ResourceLocator) -> Fetched<T> {
        match self.try_fetch(locator).await {
            Ok(data) => Fetched::success(data),
            Err(err) => {
                match &err {
                    ClientError::RequestFailed(cause) => {
                        tracing::error!("Request for {} failed: {}", locator, cause)
                    }
                    ClientError::NotFound(_) => tracing::debug!("{} not found", locator),
                    upstream if upstream.is_server_error() => {
                        tracing::error!("Users API failed on {}: {}", locator, upstream)
                    }
                    rejected if rejected.is_client_error() => {
                        tracing::warn!("Users API rejected {}: {}", locator, rejected)
                    }
                    other => tracing::warn!("Fetching {} failed: {}", locator, other),
                }
                if let Some(problem) = err.problem() {
                    tracing::warn!(
                        problem_type = ?problem.problem_type,
                        title = ?problem.title,
                        detail = ?problem.detail,
                        instance = ?problem.instance,
                        "API returned problem details"
                    );
                }
                err.into_fetched(locator, self.messages, self.failure_message(locator))
            }
        }
    }

    /// Fetch a resource, keeping the technical error
    pub async fn try_fetch<T: DeserializeOwned>(&self, locator: &ResourceLocator) -> Result<T> {
        let url = self.url_for(locator)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, self.cache_control())
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn cache_control(&self) -> String {
        match self.revalidate.as_secs() {
            0 => "no-cache".to_string(),
            secs => format!("max-age={}", secs),
        }
    }

    fn failure_message(&self, locator: &ResourceLocator) -> &'static str {
        if locator.is_item() {
            self.messages.fetch_user_failed
        } else {
            self.messages.fetch_users_failed
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let url = response.url().to_string();
            let is_problem = is_problem_json(response.headers());
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let problem = if is_problem {
                serde_json::from_str::<ProblemDetails>(&error_text).ok()
            } else {
                None
            };

            if status == StatusCode::NOT_FOUND && problem.is_none() {
                return Err(ClientError::NotFound(url));
            }

            let message = problem
                .as_ref()
                .and_then(|p| p.title.clone())
                .unwrap_or(error_text);
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
                problem,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

fn is_problem_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(PROBLEM_JSON))
}
