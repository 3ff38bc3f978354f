//! Service container.

use unilink_reqwest::ApiClient;

use crate::{
    AuthService, ChatbotService, ForumService, InternshipService, PortfolioService, ProjectService,
};

/// Every domain service, sharing one [`ApiClient`].
///
/// Cloning is cheap; all clones share the same connection pool and token
/// store.
#[derive(Debug, Clone)]
pub struct Services {
    /// Login, registration and profile.
    pub auth: AuthService,
    /// Internship listings and applications.
    pub internships: InternshipService,
    /// Collaborative projects.
    pub projects: ProjectService,
    /// Forum posts and comments.
    pub forum: ForumService,
    /// Career assistant.
    pub chatbot: ChatbotService,
    /// Portfolio builder.
    pub portfolio: PortfolioService,
}

impl Services {
    /// Creates all services over the given client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            internships: InternshipService::new(client.clone()),
            projects: ProjectService::new(client.clone()),
            forum: ForumService::new(client.clone()),
            chatbot: ChatbotService::new(client.clone()),
            portfolio: PortfolioService::new(client),
        }
    }
}
