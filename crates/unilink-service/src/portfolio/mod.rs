//! Portfolio builder service.
//!
//! [`PortfolioService`] talks to the backend. [`PortfolioProvider`] is the
//! seam the portfolio builder depends on, so a network-free creator can be
//! swapped in for demos when the `demo` feature is enabled.

#[cfg(any(test, feature = "demo"))]
mod demo;

#[cfg(any(test, feature = "demo"))]
pub use demo::{DEMO_CREATE_DELAY, DemoPortfolio};
use jiff::Timestamp;
use unilink_core::Result;
use unilink_core::types::{
    NewPortfolio, Portfolio, PortfolioCreated, PortfolioTemplate, PortfolioUpdate, ShareLink,
};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_PORTFOLIO;

/// Creates portfolios on behalf of the portfolio builder.
#[async_trait::async_trait]
pub trait PortfolioProvider: Send + Sync {
    /// Creates a portfolio and reports the outcome.
    async fn create_portfolio(&self, portfolio: &NewPortfolio) -> Result<PortfolioCreated>;
}

/// Wraps the `/portfolio` resource family.
///
/// Every failure is logged at `error` level before being returned.
#[derive(Debug, Clone)]
pub struct PortfolioService {
    client: ApiClient,
}

impl PortfolioService {
    /// Creates a new portfolio service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a portfolio.
    pub async fn create(&self, portfolio: &NewPortfolio) -> Result<Portfolio> {
        self.client
            .post("/portfolio", portfolio)
            .await
            .inspect_err(|err| log_failure("create", err))
    }

    /// Fetches a portfolio.
    pub async fn get(&self, id: &str) -> Result<Portfolio> {
        self.client
            .get(&format!("/portfolio/{id}"))
            .await
            .inspect_err(|err| log_failure("get", err))
    }

    /// Applies a partial update and returns the new state.
    pub async fn update(&self, id: &str, changes: &PortfolioUpdate) -> Result<Portfolio> {
        self.client
            .put(&format!("/portfolio/{id}"), changes)
            .await
            .inspect_err(|err| log_failure("update", err))
    }

    /// Returns the public link of a portfolio.
    pub async fn share_link(&self, id: &str) -> Result<ShareLink> {
        self.client
            .get(&format!("/portfolio/{id}/share-link"))
            .await
            .inspect_err(|err| log_failure("share_link", err))
    }

    /// Lists the templates portfolios can be rendered with.
    pub async fn list_templates(&self) -> Result<Vec<PortfolioTemplate>> {
        self.client
            .get("/portfolio/templates")
            .await
            .inspect_err(|err| log_failure("list_templates", err))
    }
}

fn log_failure(operation: &'static str, err: &unilink_core::Error) {
    tracing::error!(
        target: TRACING_TARGET_PORTFOLIO,
        operation,
        error = %err,
        "Portfolio request failed"
    );
}

#[async_trait::async_trait]
impl PortfolioProvider for PortfolioService {
    async fn create_portfolio(&self, portfolio: &NewPortfolio) -> Result<PortfolioCreated> {
        let created = self.create(portfolio).await?;
        Ok(PortfolioCreated {
            success: true,
            id: created.id,
            share_url: None,
            created_at: created.updated_at.unwrap_or_else(Timestamp::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use unilink_core::ErrorKind;
    use unilink_reqwest::{ApiConfig, MemoryTokenStore};
    use unilink_test::MockBackend;

    use super::*;

    fn service(backend: &MockBackend) -> PortfolioService {
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::with_token("t"))
                .unwrap();
        PortfolioService::new(client)
    }

    #[tokio::test]
    async fn test_get_and_update() {
        let backend = MockBackend::start().await.unwrap();
        let portfolio = service(&backend).get("pf-1").await.unwrap();
        assert_eq!(portfolio.template_id.as_deref(), Some("t-minimal"));

        let changes = PortfolioUpdate {
            theme: Some("dark".into()),
            ..Default::default()
        };
        let updated = service(&backend).update("pf-1", &changes).await.unwrap();
        assert_eq!(updated.theme.as_deref(), Some("dark"));

        let request = backend.last_request().unwrap();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.body, serde_json::json!({ "theme": "dark" }));
    }

    #[tokio::test]
    async fn test_share_link_and_templates() {
        let backend = MockBackend::start().await.unwrap();
        let link = service(&backend).share_link("pf-1").await.unwrap();
        assert_eq!(link.url, "https://unilink.dev/p/pf-1");

        let templates = service(&backend).list_templates().await.unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].id, "t-minimal");
    }

    #[tokio::test]
    async fn test_provider_reports_backend_identifier() {
        let backend = MockBackend::start().await.unwrap();
        let portfolio = NewPortfolio {
            title: "My work".into(),
            ..Default::default()
        };

        let created = service(&backend)
            .create_portfolio(&portfolio)
            .await
            .unwrap();
        assert!(created.success);
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_missing_portfolio_fails() {
        let backend = MockBackend::start().await.unwrap();
        let err = service(&backend).get("pf-9").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.message.as_deref(), Some("Portfolio not found"));
    }
}
