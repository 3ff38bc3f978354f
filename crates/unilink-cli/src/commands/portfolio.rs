use anyhow::Context;
use clap::Subcommand;
use unilink_core::types::{NewPortfolio, PortfolioUpdate};
#[cfg(feature = "demo")]
use unilink_service::DemoPortfolio;

use super::{App, Output};

/// Portfolio subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PortfolioCommand {
    /// Create a portfolio
    Create {
        /// Portfolio title
        #[arg(long)]
        title: String,
        /// Template identifier, see `portfolio templates`
        #[arg(long = "template")]
        template_id: Option<String>,
        /// Theme name
        #[arg(long)]
        theme: Option<String>,
    },
    /// Show a portfolio
    Get {
        /// Portfolio identifier
        id: String,
    },
    /// Change a portfolio
    Update {
        /// Portfolio identifier
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New template identifier
        #[arg(long = "template")]
        template_id: Option<String>,
        /// New theme name
        #[arg(long)]
        theme: Option<String>,
        /// Make the share link public (true) or private (false)
        #[arg(long)]
        public: Option<bool>,
    },
    /// Print the public link of a portfolio
    ShareLink {
        /// Portfolio identifier
        id: String,
    },
    /// List available templates
    Templates,
    /// Pretend to create a portfolio without contacting the backend
    #[cfg(feature = "demo")]
    Demo {
        /// Portfolio title
        #[arg(long, default_value = "Demo portfolio")]
        title: String,
    },
}

impl PortfolioCommand {
    pub(super) async fn execute(self, app: &App) -> anyhow::Result<Output> {
        let service = &app.services.portfolio;

        match self {
            Self::Create {
                title,
                template_id,
                theme,
            } => {
                let portfolio = NewPortfolio {
                    title,
                    template_id,
                    sections: Vec::new(),
                    theme,
                };
                let created = service
                    .create(&portfolio)
                    .await
                    .context("failed to create portfolio")?;
                Output::json(&created)
            }
            Self::Get { id } => {
                let portfolio = service
                    .get(&id)
                    .await
                    .with_context(|| format!("failed to fetch portfolio {id}"))?;
                Output::json(&portfolio)
            }
            Self::Update {
                id,
                title,
                template_id,
                theme,
                public,
            } => {
                let changes = PortfolioUpdate {
                    title,
                    template_id,
                    sections: None,
                    theme,
                    is_public: public,
                };
                let updated = service
                    .update(&id, &changes)
                    .await
                    .with_context(|| format!("failed to update portfolio {id}"))?;
                Output::json(&updated)
            }
            Self::ShareLink { id } => {
                let link = service
                    .share_link(&id)
                    .await
                    .with_context(|| format!("failed to fetch share link for {id}"))?;
                Ok(Output::Text(link.url))
            }
            Self::Templates => {
                let templates = service
                    .list_templates()
                    .await
                    .context("failed to list templates")?;
                Output::json(&templates)
            }
            #[cfg(feature = "demo")]
            Self::Demo { title } => {
                let portfolio = NewPortfolio {
                    title,
                    ..Default::default()
                };
                let created = DemoPortfolio::new().create(&portfolio).await;
                Output::json(&created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use unilink_reqwest::{ApiClient, ApiConfig, MemoryTokenStore};
    use unilink_test::MockBackend;

    use super::*;

    #[tokio::test]
    async fn test_share_link_prints_plain_url() {
        let backend = MockBackend::start().await.unwrap();
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::new()).unwrap();

        let output = PortfolioCommand::ShareLink { id: "pf-1".into() }
            .execute(&App::new(client))
            .await
            .unwrap();
        assert_eq!(output, Output::Text("https://unilink.dev/p/pf-1".into()));
    }
}
