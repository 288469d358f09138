//! User domain model

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users` and `GET /users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned by the API
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_api_payload() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","name":"Alice","email":"a@x.com"}"#).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"9","name":"Bob","email":"b@x.com","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Bob");
    }

    #[test]
    fn test_user_missing_field_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"id":"1","name":"Alice"}"#);
        assert!(result.is_err());
    }
}
