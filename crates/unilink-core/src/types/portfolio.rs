//! Portfolio records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    /// Portfolio identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Portfolio title.
    pub title: String,
    /// Template the portfolio is rendered with.
    pub template_id: Option<String>,
    /// Content sections in display order.
    pub sections: Vec<PortfolioSection>,
    /// Theme name.
    pub theme: Option<String>,
    /// Whether the share link is publicly reachable.
    pub is_public: bool,
    /// Last modification timestamp.
    pub updated_at: Option<Timestamp>,
}

/// One content section of a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSection {
    /// Section type, e.g. "about" or "projects".
    #[serde(rename = "type")]
    pub kind: String,
    /// Section heading.
    pub title: Option<String>,
    /// Section content, shaped by the section type.
    pub content: Value,
}

/// Payload for `POST /portfolio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    /// Portfolio title.
    pub title: String,
    /// Template to render with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Content sections.
    #[serde(default)]
    pub sections: Vec<PortfolioSection>,
    /// Theme name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Partial update for `PUT /portfolio/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New template identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Replacement section list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<PortfolioSection>>,
    /// New theme name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// New visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// A public link to a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareLink {
    /// Shareable URL.
    #[serde(alias = "shareLink", alias = "link")]
    pub url: String,
}

/// A portfolio template offered by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioTemplate {
    /// Template identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Template name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Preview image URI.
    pub preview_url: Option<String>,
}

/// Outcome of a portfolio creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCreated {
    /// Whether the portfolio was created.
    pub success: bool,
    /// Identifier of the new portfolio.
    pub id: String,
    /// Public link, when one was generated.
    #[serde(default)]
    pub share_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Timestamp,
}
