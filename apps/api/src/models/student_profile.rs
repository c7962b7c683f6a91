use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementStatus {
    #[default]
    NotPlaced,
    Placed,
}

impl PlacementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::NotPlaced => "NOT_PLACED",
            PlacementStatus::Placed => "PLACED",
        }
    }
}

impl FromStr for PlacementStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_PLACED" => Ok(PlacementStatus::NotPlaced),
            "PLACED" => Ok(PlacementStatus::Placed),
            other => Err(UnknownVariant {
                kind: "placement status",
                value: other.to_string(),
            }),
        }
    }
}

/// Academic profile of a student. At most one per account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub resume_url: Option<String>,
    pub skills: Option<String>, // comma separated
    pub cgpa: Option<f64>,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub placement_status: PlacementStatus,
}

/// Body of `PUT /api/profile/me`. Replaces every field of the stored profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub resume_url: Option<String>,
    pub skills: Option<String>,
    pub cgpa: Option<f64>,
    pub department: Option<String>,
    pub graduation_year: Option<i32>,
    pub placement_status: Option<PlacementStatus>,
}
