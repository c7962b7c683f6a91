use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored job posting. `posted_by` is the id of the posting account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub salary_range: Option<String>,
    pub location: Option<String>,
    pub posted_by: i64,
    pub created_at: DateTime<Utc>,
}

/// Client payload for `POST /api/jobs`. Every field is optional and unvalidated;
/// any `id` or `postedBy` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewJobPosting {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<String>, // comma separated
    pub salary_range: Option<String>,
    pub location: Option<String>,
}
