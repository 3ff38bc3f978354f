//! Project records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A collaborative project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Project identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: Option<String>,
    /// Technologies used.
    pub tech_stack: Vec<String>,
    /// Owner account identifier.
    pub owner: Option<String>,
    /// Member account identifiers.
    pub members: Vec<String>,
    /// Lifecycle status, e.g. "open" or "in-progress".
    pub status: Option<String>,
    /// Source repository link.
    pub repository_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Project title.
    pub title: String,
    /// Project description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Technologies used.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Technology filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<String>,
}
