use anyhow::Context;
use clap::Subcommand;
use unilink_core::types::{NewProject, ProjectFilter};

use super::{App, Output};

/// Project subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProjectsCommand {
    /// List projects
    List {
        #[arg(long)]
        search: Option<String>,
        /// Technology filter
        #[arg(long)]
        tech: Option<String>,
    },
    /// Show one project
    Get { id: String },
    /// Start a project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Technology used; repeat for several
        #[arg(long = "tech")]
        tech_stack: Vec<String>,
        #[arg(long)]
        repository_url: Option<String>,
    },
    /// Join a project
    Join { id: String },
}

impl ProjectsCommand {
    pub(super) async fn execute(self, app: &App) -> anyhow::Result<Output> {
        let service = &app.services.projects;

        match self {
            Self::List { search, tech } => {
                let projects = service
                    .list(&ProjectFilter { search, tech })
                    .await
                    .context("failed to list projects")?;
                Output::json(&projects)
            }
            Self::Get { id } => {
                let project = service
                    .get(&id)
                    .await
                    .with_context(|| format!("failed to fetch project {id}"))?;
                Output::json(&project)
            }
            Self::Create {
                title,
                description,
                tech_stack,
                repository_url,
            } => {
                let project = NewProject {
                    title,
                    description,
                    tech_stack,
                    repository_url,
                };
                let created = service
                    .create(&project)
                    .await
                    .context("failed to create project")?;
                Output::json(&created)
            }
            Self::Join { id } => {
                let project = service
                    .join(&id)
                    .await
                    .with_context(|| format!("failed to join project {id}"))?;
                Output::json(&project)
            }
        }
    }
}
