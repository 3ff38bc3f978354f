//! Network-free portfolio creator for demos.

use std::time::Duration;

use jiff::Timestamp;
use unilink_core::Result;
use unilink_core::types::{NewPortfolio, PortfolioCreated};
use uuid::Uuid;

use super::PortfolioProvider;
use crate::TRACING_TARGET_PORTFOLIO;

/// Delay before a demo creation resolves.
pub const DEMO_CREATE_DELAY: Duration = Duration::from_secs(1);

const DEMO_SHARE_BASE: &str = "https://unilink.dev/p";

/// Pretends to create portfolios.
///
/// Creation never fails and never touches the network: it waits for a fixed
/// delay and reports success with a freshly generated identifier.
#[derive(Debug, Clone)]
pub struct DemoPortfolio {
    delay: Duration,
}

impl Default for DemoPortfolio {
    fn default() -> Self {
        Self {
            delay: DEMO_CREATE_DELAY,
        }
    }
}

impl DemoPortfolio {
    /// Creates a demo creator with the default delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated creation delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Simulates a creation.
    pub async fn create(&self, portfolio: &NewPortfolio) -> PortfolioCreated {
        tokio::time::sleep(self.delay).await;

        let id = Uuid::new_v4().to_string();
        tracing::warn!(
            target: TRACING_TARGET_PORTFOLIO,
            portfolio_id = %id,
            title = %portfolio.title,
            "Demo portfolio created, nothing was sent to the backend"
        );

        PortfolioCreated {
            success: true,
            share_url: Some(format!("{DEMO_SHARE_BASE}/{id}")),
            id,
            created_at: Timestamp::now(),
        }
    }
}

#[async_trait::async_trait]
impl PortfolioProvider for DemoPortfolio {
    async fn create_portfolio(&self, portfolio: &NewPortfolio) -> Result<PortfolioCreated> {
        Ok(self.create(portfolio).await)
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_create_waits_for_delay() {
        let demo = DemoPortfolio::new();
        let started = Instant::now();

        let created = demo.create(&NewPortfolio::default()).await;
        assert!(created.success);
        assert!(started.elapsed() >= DEMO_CREATE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_creation_gets_fresh_identifier() {
        let demo = DemoPortfolio::new();
        let first = demo.create(&NewPortfolio::default()).await;
        let second = demo.create(&NewPortfolio::default()).await;

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert!(first.share_url.unwrap().ends_with(&first.id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_never_fails() {
        let provider: Box<dyn PortfolioProvider> =
            Box::new(DemoPortfolio::new().with_delay(Duration::from_millis(10)));
        let created = provider
            .create_portfolio(&NewPortfolio::default())
            .await
            .unwrap();
        assert!(created.success);
    }
}
