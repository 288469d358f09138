//! Error types for the Roster client

use roster_core::Fetched;
use roster_core::domain::problem::ProblemDetails;
use roster_core::i18n::Messages;
use thiserror::Error;

use crate::locator::ResourceLocator;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while fetching from the users API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body, or the problem title when one was sent
        message: String,
        /// Parsed problem payload, if the API sent one
        problem: Option<ProblemDetails>,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The locator cannot be turned into a request URL
    #[error("Invalid resource locator: {0}")]
    InvalidLocator(String),
}

impl ClientError {
    /// Check if this error is a "not found" error
    ///
    /// A problem payload of type `not-found` counts regardless of status.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::ApiError {
                status, problem, ..
            } => *status == 404 || problem.as_ref().is_some_and(ProblemDetails::is_not_found),
            _ => false,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Problem payload attached to the error, if any
    pub fn problem(&self) -> Option<&ProblemDetails> {
        match self {
            Self::ApiError { problem, .. } => problem.as_ref(),
            _ => None,
        }
    }

    /// Collapse into the result a page renders
    ///
    /// Only the localized message survives; everything else is for logs.
    /// A missing item is reported as such; a missing collection is just
    /// another failed fetch.
    pub fn into_fetched<T>(
        self,
        locator: &ResourceLocator,
        messages: &Messages,
        failure: &str,
    ) -> Fetched<T> {
        if locator.is_item() && self.is_not_found() {
            Fetched::not_found(messages.user_not_found)
        } else {
            Fetched::error(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::domain::problem::ProblemType;
    use roster_core::i18n::Locale;

    fn api_error(status: u16, message: &str) -> ClientError {
        ClientError::ApiError {
            status,
            message: message.into(),
            problem: None,
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(api_error(404, "gone").is_not_found());
        assert!(api_error(404, "gone").is_client_error());
        assert!(api_error(503, "down").is_server_error());
        assert!(!api_error(503, "down").is_not_found());
        assert!(!ClientError::ParseError("bad".into()).is_client_error());
    }

    #[test]
    fn test_not_found_problem_on_other_status() {
        let err = ClientError::ApiError {
            status: 400,
            message: "missing".into(),
            problem: Some(ProblemDetails {
                problem_type: Some(ProblemType::NotFound),
                ..Default::default()
            }),
        };
        assert!(err.is_not_found());
        assert!(err.problem().is_some());
    }

    #[test]
    fn test_into_fetched_uses_localized_messages() {
        let messages = Locale::Ja.messages();

        let item = ResourceLocator::user("1");

        let fetched: Fetched<()> =
            ClientError::NotFound("/users/1".into()).into_fetched(&item, messages, "failed");
        assert_eq!(fetched, Fetched::not_found("ユーザーが存在しません。"));

        let fetched: Fetched<()> =
            api_error(500, "stack trace").into_fetched(&item, messages, "failed");
        assert_eq!(fetched, Fetched::error("failed"));
    }

    #[test]
    fn test_missing_collection_is_a_plain_failure() {
        let messages = Locale::Ja.messages();
        let users = ResourceLocator::users();

        let fetched: Fetched<()> =
            ClientError::NotFound("/users".into()).into_fetched(&users, messages, "failed");
        assert_eq!(fetched, Fetched::error("failed"));

        let with_problem = ClientError::ApiError {
            status: 400,
            message: "missing".into(),
            problem: Some(ProblemDetails {
                problem_type: Some(ProblemType::NotFound),
                ..Default::default()
            }),
        };
        let fetched: Fetched<()> = with_problem.into_fetched(&users, messages, "failed");
        assert_eq!(fetched, Fetched::error("failed"));
    }
}
