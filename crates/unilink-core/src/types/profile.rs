//! Profile records held in client state slices.

use serde::{Deserialize, Serialize};

/// An education entry on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    /// Entry identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// School or university.
    pub institution: String,
    /// Degree, e.g. "B.Sc.".
    pub degree: Option<String>,
    /// Field of study.
    pub field_of_study: Option<String>,
    /// First year.
    pub start_year: Option<i32>,
    /// Final year, absent while ongoing.
    pub end_year: Option<i32>,
}

/// A skill entry on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Entry identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Skill name.
    pub name: String,
    /// Self-assessed level, e.g. "advanced".
    pub level: Option<String>,
}
