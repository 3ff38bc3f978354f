//! Authentication service.

use unilink_core::Result;
use unilink_core::types::{AuthSession, LoginRequest, RegisterRequest, User};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_AUTH;

/// Login, registration and profile lookup.
///
/// A successful login or registration writes the returned token into the
/// client's token store, so every later request carries it. The token is
/// never refreshed: once the server rejects it, callers see a `401` error
/// and must log in again.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticates with email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession> {
        tracing::debug!(target: TRACING_TARGET_AUTH, email = %request.email, "Logging in");

        let session: AuthSession = self.client.post("/auth/login", request).await?;
        self.persist(&session)?;
        Ok(session)
    }

    /// Creates a new account and signs in with it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        tracing::debug!(target: TRACING_TARGET_AUTH, email = %request.email, "Registering");

        let session: AuthSession = self.client.post("/auth/register", request).await?;
        self.persist(&session)?;
        Ok(session)
    }

    /// Fetches the profile of the authenticated account.
    pub async fn fetch_profile(&self) -> Result<User> {
        self.client.get("/auth/me").await
    }

    /// Forgets the stored token. No request is sent.
    pub fn logout(&self) -> Result<()> {
        self.client.tokens().clear()?;
        tracing::info!(target: TRACING_TARGET_AUTH, "Logged out");
        Ok(())
    }

    /// Returns true if a token is currently stored.
    ///
    /// This does not check whether the server still accepts the token.
    pub fn has_token(&self) -> Result<bool> {
        Ok(self.client.tokens().get()?.is_some())
    }

    fn persist(&self, session: &AuthSession) -> Result<()> {
        self.client.tokens().set(&session.token)?;
        tracing::info!(
            target: TRACING_TARGET_AUTH,
            user_id = session.user.as_ref().map(|u| u.id.as_str()),
            "Session established"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use unilink_core::ErrorKind;
    use unilink_reqwest::{ApiConfig, MemoryTokenStore, TokenStore};
    use unilink_test::{MOCK_PASSWORD_REJECTED, MockBackend};

    use super::*;

    fn service(backend: &MockBackend, tokens: &MemoryTokenStore) -> AuthService {
        let client = ApiClient::new(ApiConfig::new(backend.url()), tokens.clone()).unwrap();
        AuthService::new(client)
    }

    #[tokio::test]
    async fn test_login_stores_token_for_later_requests() {
        let backend = MockBackend::start().await.unwrap();
        let tokens = MemoryTokenStore::new();
        let auth = service(&backend, &tokens);

        let session = auth
            .login(&LoginRequest::new("ada@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(session.token, "token-ada@example.com");
        assert_eq!(tokens.get().unwrap().as_deref(), Some("token-ada@example.com"));

        let profile = auth.fetch_profile().await.unwrap();
        assert_eq!(profile.id, "u-1");
        assert_eq!(
            backend.last_request().unwrap().authorization.as_deref(),
            Some("Bearer token-ada@example.com")
        );
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_previous_token() {
        let backend = MockBackend::start().await.unwrap();
        let tokens = MemoryTokenStore::with_token("old");
        let auth = service(&backend, &tokens);

        let err = auth
            .login(&LoginRequest::new("ada@example.com", MOCK_PASSWORD_REJECTED))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message.as_deref(), Some("Invalid credentials"));
        assert_eq!(tokens.get().unwrap().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_register_stores_token() {
        let backend = MockBackend::start().await.unwrap();
        let tokens = MemoryTokenStore::new();
        let auth = service(&backend, &tokens);

        let request = RegisterRequest {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            password: "secret".into(),
            role: Some("professional".into()),
        };
        let session = auth.register(&request).await.unwrap();
        assert_eq!(session.user.unwrap().name, "Grace");
        assert!(auth.has_token().unwrap());
    }

    #[tokio::test]
    async fn test_logout_removes_authorization_header() {
        let backend = MockBackend::start().await.unwrap();
        let tokens = MemoryTokenStore::with_token("abc");
        let auth = service(&backend, &tokens);

        auth.logout().unwrap();
        assert!(!auth.has_token().unwrap());

        let err = auth.fetch_profile().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(401));
        assert!(backend.last_request().unwrap().authorization.is_none());
    }

    #[tokio::test]
    async fn test_stale_token_is_not_retried() {
        let backend = MockBackend::start().await.unwrap();
        let tokens = MemoryTokenStore::with_token("expired");
        let auth = service(&backend, &tokens);

        let err = auth.fetch_profile().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(backend.requests().len(), 1);
    }
}
