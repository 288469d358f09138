//! Front-end configuration
//!
//! Built once at startup from command-line flags and environment variables,
//! validated, and then handed to the pieces that need it. Nothing reads the
//! environment after this point.

use std::time::Duration;

use anyhow::Context;
use roster_client::ApiClient;
use roster_core::i18n::Locale;
use url::Url;

/// Front-end configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the users API (e.g., "http://localhost:8080")
    pub api_url: Url,

    /// Address the HTTP server listens on
    pub bind_addr: String,

    /// Language of every user-facing text
    pub locale: Locale,

    /// Revalidation window hinted on every API request
    pub revalidate: Duration,

    /// Optional per-request timeout; transport defaults apply when unset
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            bind_addr: "0.0.0.0:3000".to_string(),
            locale: Locale::default(),
            revalidate: roster_client::DEFAULT_REVALIDATE,
            request_timeout: None,
        }
    }

    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.api_url.host_str().is_none_or(str::is_empty) {
            anyhow::bail!("api_url must name a host");
        }

        if self.api_url.cannot_be_a_base() {
            anyhow::bail!("api_url cannot be used as a base URL");
        }

        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds the API client this configuration describes
    pub fn api_client(&self) -> anyhow::Result<ApiClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to build HTTP client")?;

        Ok(ApiClient::with_client(self.api_url.clone(), http_client)
            .with_revalidate(self.revalidate)
            .with_locale(self.locale))
    }
}

/// Parses the API base URL, which must be absolute
pub fn parse_api_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        anyhow::bail!("API_URL cannot be empty");
    }
    Url::parse(raw).with_context(|| format!("API_URL is not an absolute URL: {raw}"))
}
