//! Problem details (RFC 7807) returned by the users API on failure

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Media type that marks a response body as a problem payload
pub const PROBLEM_JSON: &str = "application/problem+json";

const PROBLEM_BASE: &str = "https://example.com/problems/";

/// Structured error body describing an HTTP failure
///
/// Every field is optional; the API may send any subset of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<ProblemType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Whether the problem reports a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self.problem_type, Some(ProblemType::NotFound))
    }
}

/// Known problem type URIs published by the users API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemType {
    Validate,
    Duplicate,
    NotFound,
    NoContent,
    InvalidJson,
    MethodNotAllowed,
    BadRequest,
    UnsupportedMediaType,
    Conflict,
    Unauthorized,
    Forbidden,
    InternalServerError,
    /// Any URI outside the published catalogue
    Other(String),
}

impl ProblemType {
    const CATALOGUE: [(&'static str, ProblemType); 12] = [
        ("validate", ProblemType::Validate),
        ("duplicate", ProblemType::Duplicate),
        ("not-found", ProblemType::NotFound),
        ("no-content", ProblemType::NoContent),
        ("invalid-json", ProblemType::InvalidJson),
        ("method-not-allowed", ProblemType::MethodNotAllowed),
        ("bad-request", ProblemType::BadRequest),
        ("unsupported-media-type", ProblemType::UnsupportedMediaType),
        ("conflict", ProblemType::Conflict),
        ("unauthorized", ProblemType::Unauthorized),
        ("forbidden", ProblemType::Forbidden),
        ("internal-server-error", ProblemType::InternalServerError),
    ];

    /// Resolve a problem type URI against the catalogue
    pub fn from_uri(uri: &str) -> Self {
        uri.strip_prefix(PROBLEM_BASE)
            .and_then(|slug| {
                Self::CATALOGUE
                    .iter()
                    .find(|(name, _)| *name == slug)
                    .map(|(_, kind)| kind.clone())
            })
            .unwrap_or_else(|| ProblemType::Other(uri.to_string()))
    }

    /// The URI this problem type is published under
    pub fn uri(&self) -> String {
        match self {
            ProblemType::Other(uri) => uri.clone(),
            known => Self::CATALOGUE
                .iter()
                .find(|(_, kind)| kind == known)
                .map(|(name, _)| format!("{PROBLEM_BASE}{name}"))
                .unwrap_or_default(),
        }
    }
}

impl Serialize for ProblemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.uri())
    }
}

impl<'de> Deserialize<'de> for ProblemType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let uri = String::deserialize(deserializer)?;
        Ok(ProblemType::from_uri(&uri))
    }
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}
