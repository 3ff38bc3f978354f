//! Authentication request and response records.

use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plain-text password, sent over the configured transport.
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Payload sent to `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name of the new account.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Platform role, e.g. `student` or `professional`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A platform account as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Account identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Platform role.
    pub role: Option<String>,
    /// Avatar image URI.
    pub avatar: Option<String>,
    /// Headline, e.g. "Backend Engineer".
    pub title: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Self-reported skills.
    pub skills: Vec<String>,
}

/// Response of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated account, when the backend includes it.
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_underscore_id() {
        let user: User =
            serde_json::from_str(r#"{"_id":"u1","name":"Ada","email":"ada@example.com"}"#)
                .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.skills.is_empty());
    }

    #[test]
    fn test_register_skips_missing_role() {
        let request = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            role: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("role").is_none());
    }

    #[test]
    fn test_session_without_user() {
        let session: AuthSession = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(session.token, "abc");
        assert!(session.user.is_none());
    }
}
