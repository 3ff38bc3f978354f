use anyhow::Context;
use clap::Subcommand;
use unilink_core::types::{InternshipApplication, InternshipFilter, NewInternship};
use unilink_state::SliceStatus;

use super::{App, Output};
use crate::TRACING_TARGET_COMMAND;

/// Internship subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum InternshipsCommand {
    /// List internships
    List {
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        /// Location filter
        #[arg(long)]
        location: Option<String>,
        /// Engagement type, e.g. full-time
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Show one internship
    Get {
        /// Internship identifier
        id: String,
    },
    /// Publish an internship
    Create {
        /// Position title
        #[arg(long)]
        title: String,
        /// Hiring company
        #[arg(long)]
        company: String,
        /// Where the work happens
        #[arg(long)]
        location: Option<String>,
        /// Role description
        #[arg(long)]
        description: Option<String>,
        /// Engagement type, e.g. full-time
        #[arg(long = "type")]
        kind: Option<String>,
        /// Compensation, free text
        #[arg(long)]
        stipend: Option<String>,
        /// Length of the internship, e.g. 3 months
        #[arg(long)]
        duration: Option<String>,
        /// Required skill; repeat for several
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Apply to an internship
    Apply {
        /// Internship identifier
        id: String,
        /// Cover letter text
        #[arg(long)]
        cover_letter: Option<String>,
        /// Link to a hosted resume
        #[arg(long)]
        resume_url: Option<String>,
    },
}

impl InternshipsCommand {
    pub(super) async fn execute(self, app: &App) -> anyhow::Result<Output> {
        let service = &app.services.internships;

        match self {
            Self::List {
                search,
                location,
                kind,
            } => {
                let filter = InternshipFilter {
                    search,
                    location,
                    kind,
                };
                let slice = &app.store.internships;
                slice.load(service.list(&filter)).await;

                let snapshot = slice.snapshot();
                let status = SliceStatus::of(&snapshot);
                tracing::info!(
                    target: TRACING_TARGET_COMMAND,
                    slice = slice.name(),
                    status = %status,
                    "Internships loaded"
                );
                if status.is_failed() {
                    eprintln!("{status}");
                }
                Output::json(&snapshot)
            }
            Self::Get { id } => {
                let internship = service
                    .get(&id)
                    .await
                    .with_context(|| format!("failed to fetch internship {id}"))?;
                Output::json(&internship)
            }
            Self::Create {
                title,
                company,
                location,
                description,
                kind,
                stipend,
                duration,
                skills,
            } => {
                let internship = NewInternship {
                    title,
                    company,
                    location,
                    description,
                    kind,
                    stipend,
                    duration,
                    skills,
                    deadline: None,
                };
                let created = service
                    .create(&internship)
                    .await
                    .context("failed to create internship")?;
                Output::json(&created)
            }
            Self::Apply {
                id,
                cover_letter,
                resume_url,
            } => {
                let application = InternshipApplication {
                    cover_letter,
                    resume_url,
                };
                let receipt = service
                    .apply(&id, &application)
                    .await
                    .with_context(|| format!("failed to apply to internship {id}"))?;
                Output::json(&receipt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use unilink_reqwest::{ApiClient, ApiConfig, MemoryTokenStore};
    use unilink_test::MockBackend;

    use super::*;

    fn app(backend: &MockBackend) -> App {
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::new()).unwrap();
        App::new(client)
    }

    #[tokio::test]
    async fn test_list_fills_internship_slice() {
        let backend = MockBackend::start().await.unwrap();
        let app = app(&backend);

        let command = InternshipsCommand::List {
            search: Some("backend".into()),
            location: None,
            kind: None,
        };
        let output = command.execute(&app).await.unwrap();

        let json = output.as_json().unwrap();
        assert_eq!(json["items"][0]["id"], "i-1");
        assert_eq!(json["loading"], false);
        assert_eq!(app.store.internships.snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_failure_is_rendered_inline() {
        let backend = MockBackend::start().await.unwrap();
        backend.fail_next(1, 503);
        let app = app(&backend);

        let command = InternshipsCommand::List {
            search: None,
            location: None,
            kind: None,
        };
        let output = command.execute(&app).await.unwrap();

        let json = output.as_json().unwrap();
        assert_eq!(json["error"], "injected failure");
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_internship_fails() {
        let backend = MockBackend::start().await.unwrap();
        let err = InternshipsCommand::Get { id: "zzz".into() }
            .execute(&app(&backend))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("Internship not found"));
    }
}
