//! Resource locators
//!
//! A locator names what to fetch relative to the API base URL, independent
//! of where that base lives.

/// Collection served by the users API
pub const USERS: &str = "users";

/// What a single fetch asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// A whole collection, e.g. `GET /users`
    Collection { collection: &'static str },

    /// One item of a collection, e.g. `GET /users/{id}`
    Item { collection: &'static str, id: String },
}

impl ResourceLocator {
    pub fn users() -> Self {
        Self::Collection { collection: USERS }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::Item {
            collection: USERS,
            id: id.into(),
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item { .. })
    }

    /// Path segments appended to the base URL, unencoded
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::Collection { collection } => vec![*collection],
            Self::Item { collection, id } => vec![*collection, id.as_str()],
        }
    }
}

impl std::fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.segments().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        assert_eq!(ResourceLocator::users().segments(), vec!["users"]);
        assert_eq!(ResourceLocator::user("42").segments(), vec!["users", "42"]);
        assert!(ResourceLocator::user("42").is_item());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceLocator::user("7").to_string(), "/users/7");
    }
}
