//! Forum records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A forum thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumPost {
    /// Post identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Thread title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author display name or identifier.
    pub author: Option<String>,
    /// Category, e.g. "career" or "projects".
    pub category: Option<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Comments, when the backend embeds them.
    pub comments: Vec<ForumComment>,
    /// Creation timestamp.
    pub created_at: Option<Timestamp>,
}

/// A comment on a forum thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumComment {
    /// Comment identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Author display name or identifier.
    pub author: Option<String>,
    /// Body text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /forum/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForumPost {
    /// Thread title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for `POST /forum/posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Body text.
    pub content: String,
}

impl NewComment {
    /// Creates a new comment payload.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Query parameters for `GET /forum/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumFilter {
    /// Category filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
