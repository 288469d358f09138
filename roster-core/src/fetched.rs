//! Tagged outcome of a single resource fetch
//!
//! The fetcher never hands raw errors to a page. It resolves every request
//! into one of these variants, already carrying the localized message the
//! page should display.

use serde::{Deserialize, Serialize};

/// Result of fetching a resource, as consumed by the page renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Fetched<T> {
    /// The resource was fetched and parsed
    Success { data: T },

    /// The API reported the resource as absent
    NotFound { message: String },

    /// Transport failure, unexpected status, or malformed body
    Error { message: String },
}

impl<T> Fetched<T> {
    pub fn success(data: T) -> Self {
        Fetched::Success { data }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Fetched::NotFound {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Fetched::Error {
            message: message.into(),
        }
    }

    /// The user-facing message for failed fetches
    pub fn message(&self) -> Option<&str> {
        match self {
            Fetched::Success { .. } => None,
            Fetched::NotFound { message } | Fetched::Error { message } => Some(message),
        }
    }

    /// Transform the payload of a successful fetch
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Success { data } => Fetched::Success { data: f(data) },
            Fetched::NotFound { message } => Fetched::NotFound { message },
            Fetched::Error { message } => Fetched::Error { message },
        }
    }
}
