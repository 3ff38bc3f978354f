//! Forum posts and comments.

use unilink_core::Result;
use unilink_core::types::{ForumComment, ForumFilter, ForumPost, NewComment, NewForumPost};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_FORUM;

/// Wraps the `/forum/posts` resource family.
#[derive(Debug, Clone)]
pub struct ForumService {
    client: ApiClient,
}

impl ForumService {
    /// Creates a new forum service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists posts matching the filter.
    pub async fn list_posts(&self, filter: &ForumFilter) -> Result<Vec<ForumPost>> {
        self.client.get_with_query("/forum/posts", filter).await
    }

    /// Fetches a single post with its comments.
    pub async fn get_post(&self, id: &str) -> Result<ForumPost> {
        self.client.get(&format!("/forum/posts/{id}")).await
    }

    /// Publishes a new post.
    pub async fn create_post(&self, post: &NewForumPost) -> Result<ForumPost> {
        self.client.post("/forum/posts", post).await
    }

    /// Adds a comment to a post.
    pub async fn comment(&self, post_id: &str, comment: &NewComment) -> Result<ForumComment> {
        let created: ForumComment = self
            .client
            .post(&format!("/forum/posts/{post_id}/comments"), comment)
            .await?;
        tracing::debug!(
            target: TRACING_TARGET_FORUM,
            post_id = %post_id,
            comment_id = %created.id,
            "Comment added"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use unilink_reqwest::{ApiConfig, MemoryTokenStore};
    use unilink_test::MockBackend;

    use super::*;

    fn service(backend: &MockBackend) -> ForumService {
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::new()).unwrap();
        ForumService::new(client)
    }

    #[tokio::test]
    async fn test_list_posts_by_category() {
        let backend = MockBackend::start().await.unwrap();
        let filter = ForumFilter {
            category: Some("career".into()),
            ..Default::default()
        };

        let posts = service(&backend).list_posts(&filter).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "f-1");
        assert_eq!(posts[0].comments.len(), 1);
    }

    #[tokio::test]
    async fn test_comment_on_post() {
        let backend = MockBackend::start().await.unwrap();
        let comment = service(&backend)
            .comment("f-2", &NewComment::new("Count me in"))
            .await
            .unwrap();
        assert_eq!(comment.content, "Count me in");
        assert_eq!(comment.author.as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let backend = MockBackend::start().await.unwrap();
        let err = service(&backend).get_post("f-9").await.unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Post not found"));
    }
}
