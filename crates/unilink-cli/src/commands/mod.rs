//! Subcommands and their execution.

mod auth;
mod forum;
mod internships;
mod local;
mod portfolio;
mod projects;

use std::fmt;

use anyhow::Context;
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
pub use forum::ForumCommand;
pub use internships::InternshipsCommand;
pub use portfolio::PortfolioCommand;
pub use projects::ProjectsCommand;
use unilink_core::types::ChatMessage;
use unilink_reqwest::ApiClient;
use unilink_service::Services;
use unilink_state::Store;
use unilink_view::TeammatesTab;

use crate::TRACING_TARGET_COMMAND;

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and store the returned token
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(long, env = "UNILINK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the returned token
    Register {
        /// Display name
        name: String,
        /// Account email
        email: String,
        /// Account password
        #[arg(long, env = "UNILINK_PASSWORD", hide_env_values = true)]
        password: String,
        /// Account role, e.g. student or professional
        #[arg(long)]
        role: Option<String>,
    },
    /// Forget the stored token
    Logout,
    /// Show the signed-in profile
    Me,
    /// Browse, publish and apply to internships
    Internships {
        #[command(subcommand)]
        command: InternshipsCommand,
    },
    /// Browse, create and join projects
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },
    /// Read and write forum posts
    Forum {
        #[command(subcommand)]
        command: ForumCommand,
    },
    /// Ask the career assistant
    Chat {
        /// Message to send
        message: String,
        /// Continue an existing conversation
        #[arg(long)]
        conversation_id: Option<String>,
    },
    /// Build and share portfolios
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
    /// Search the teammate directory
    Teammates {
        /// Case-insensitive text matched against name, title and skills
        query: Option<String>,
        /// Tab to show
        #[arg(long, default_value = "all")]
        tab: TeammatesTab,
    },
    /// Play the landing page stat counters
    Stats,
}

/// Everything a command can reach.
#[derive(Debug, Clone)]
pub struct App {
    /// Domain services over one client.
    pub services: Services,
    /// Application-root state.
    pub store: Store,
}

impl App {
    /// Creates the application over `client` with an empty store.
    pub fn new(client: ApiClient) -> Self {
        Self {
            services: Services::new(client),
            store: Store::new(),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Structured result, printed as pretty JSON.
    Json(Value),
    /// Plain text.
    Text(String),
}

impl Output {
    /// Wraps a serializable value.
    pub fn json<T: Serialize>(value: &T) -> anyhow::Result<Self> {
        let value = serde_json::to_value(value).context("failed to encode command output")?;
        Ok(Self::Json(value))
    }

    /// Returns the JSON value, if any.
    #[cfg(test)]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Command {
    /// Short name used in logs.
    fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::Logout => "logout",
            Self::Me => "me",
            Self::Internships { .. } => "internships",
            Self::Projects { .. } => "projects",
            Self::Forum { .. } => "forum",
            Self::Chat { .. } => "chat",
            Self::Portfolio { .. } => "portfolio",
            Self::Teammates { .. } => "teammates",
            Self::Stats => "stats",
        }
    }

    /// Runs the command.
    pub async fn execute(self, app: &App) -> anyhow::Result<Output> {
        tracing::debug!(target: TRACING_TARGET_COMMAND, command = self.name(), "Executing command");

        match self {
            Self::Login { email, password } => auth::login(app, email, password).await,
            Self::Register {
                name,
                email,
                password,
                role,
            } => auth::register(app, name, email, password, role).await,
            Self::Logout => auth::logout(app),
            Self::Me => auth::me(app).await,
            Self::Internships { command } => command.execute(app).await,
            Self::Projects { command } => command.execute(app).await,
            Self::Forum { command } => command.execute(app).await,
            Self::Chat {
                message,
                conversation_id,
            } => {
                let message = ChatMessage {
                    message,
                    conversation_id,
                };
                let reply = app
                    .services
                    .chatbot
                    .send_message(&message)
                    .await
                    .context("chatbot request failed")?;
                Output::json(&reply)
            }
            Self::Portfolio { command } => command.execute(app).await,
            Self::Teammates { query, tab } => local::teammates(query, tab).await,
            Self::Stats => local::stats().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use unilink_reqwest::{ApiConfig, FileTokenStore, MemoryTokenStore, TokenStore};
    use unilink_test::MockBackend;

    use super::*;

    #[tokio::test]
    async fn test_login_persists_token_for_next_run() {
        let backend = MockBackend::start().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");

        let client =
            ApiClient::new(ApiConfig::new(backend.url()), FileTokenStore::new(&path)).unwrap();
        let login = Command::Login {
            email: "ada@example.com".into(),
            password: "secret".into(),
        };
        login.execute(&App::new(client)).await.unwrap();

        // A fresh client over the same file, as on the next invocation.
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), FileTokenStore::new(&path)).unwrap();
        let output = Command::Me.execute(&App::new(client)).await.unwrap();
        assert_eq!(output.as_json().unwrap()["name"], "Ada Lovelace");
        assert_eq!(
            backend.last_request().unwrap().authorization.as_deref(),
            Some("Bearer token-ada@example.com")
        );

        let client =
            ApiClient::new(ApiConfig::new(backend.url()), FileTokenStore::new(&path)).unwrap();
        Command::Logout.execute(&App::new(client)).await.unwrap();
        assert_eq!(FileTokenStore::new(&path).get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_chat_failure_keeps_backend_message() {
        let backend = MockBackend::start().await.unwrap();
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::new()).unwrap();
        let chat = Command::Chat {
            message: "fail".into(),
            conversation_id: None,
        };

        let err = chat.execute(&App::new(client)).await.unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("chatbot request failed"));
        assert!(rendered.contains("model unavailable"));
    }
}
