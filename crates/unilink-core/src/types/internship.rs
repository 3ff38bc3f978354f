//! Internship records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An internship listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    /// Listing identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Position title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Location, or "Remote".
    pub location: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Engagement type, e.g. "full-time" or "part-time".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Stipend as displayed to candidates.
    pub stipend: Option<String>,
    /// Duration as displayed to candidates.
    pub duration: Option<String>,
    /// Required skills.
    pub skills: Vec<String>,
    /// Application deadline.
    pub deadline: Option<Timestamp>,
    /// Creation timestamp.
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /internships`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInternship {
    /// Position title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Location, or "Remote".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Engagement type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Stipend as displayed to candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stipend: Option<String>,
    /// Duration as displayed to candidates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Required skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Application deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
}

/// Query parameters for `GET /internships`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipFilter {
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Location filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Engagement type filter.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Payload for `POST /internships/{id}/apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipApplication {
    /// Free-form cover letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Link to the candidate's resume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// Confirmation returned after applying to an internship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationReceipt {
    /// Application identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// The internship applied to.
    pub internship_id: String,
    /// Review status, e.g. "pending".
    pub status: Option<String>,
    /// Submission timestamp.
    pub applied_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internship_type_field() {
        let internship: Internship = serde_json::from_str(
            r#"{"id":"i1","title":"Intern","company":"Acme","type":"remote",
                "createdAt":"2024-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(internship.kind.as_deref(), Some("remote"));
        assert!(internship.created_at.is_some());
    }

    #[test]
    fn test_filter_skips_empty_fields() {
        let filter = InternshipFilter {
            search: Some("rust".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({ "search": "rust" }));
    }
}
