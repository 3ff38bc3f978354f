use anyhow::Context;
use clap::Subcommand;
use unilink_core::types::{ForumFilter, NewComment, NewForumPost};

use super::{App, Output};

/// Forum subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ForumCommand {
    /// List posts
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show a post with its comments
    Get { id: String },
    /// Write a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: Option<String>,
        /// Tag; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Comment on a post
    Comment {
        /// Post identifier
        id: String,
        /// Comment text
        content: String,
    },
}

impl ForumCommand {
    pub(super) async fn execute(self, app: &App) -> anyhow::Result<Output> {
        let service = &app.services.forum;

        match self {
            Self::List {
                category,
                search,
                page,
            } => {
                let filter = ForumFilter {
                    category,
                    search,
                    page,
                };
                let posts = service
                    .list_posts(&filter)
                    .await
                    .context("failed to list posts")?;
                Output::json(&posts)
            }
            Self::Get { id } => {
                let post = service
                    .get_post(&id)
                    .await
                    .with_context(|| format!("failed to fetch post {id}"))?;
                Output::json(&post)
            }
            Self::Create {
                title,
                content,
                category,
                tags,
            } => {
                let post = NewForumPost {
                    title,
                    content,
                    category,
                    tags,
                };
                let created = service
                    .create_post(&post)
                    .await
                    .context("failed to create post")?;
                Output::json(&created)
            }
            Self::Comment { id, content } => {
                let comment = service
                    .comment(&id, &NewComment::new(content))
                    .await
                    .with_context(|| format!("failed to comment on post {id}"))?;
                Output::json(&comment)
            }
        }
    }
}
