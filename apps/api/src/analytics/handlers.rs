//! Axum route handlers for placement analytics.
//!
//! Both endpoints return fixed prototype figures. Nothing here reads the
//! store, so the payloads are identical regardless of stored data.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStats {
    pub total_students: u32,
    pub placed_students: u32,
    pub average_package: String,
    pub highest_package: String,
    /// Branch → placement percentage.
    pub placement_rate: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: String,
    /// Percentage of students missing the skill.
    pub deficiency: u32,
}

pub fn mock_placement_stats() -> PlacementStats {
    let placement_rate = [("CSE", 95), ("ECE", 88), ("MECH", 75)]
        .into_iter()
        .map(|(branch, rate)| (branch.to_string(), rate))
        .collect();

    PlacementStats {
        total_students: 120,
        placed_students: 85,
        average_package: "12 LPA".to_string(),
        highest_package: "45 LPA".to_string(),
        placement_rate,
    }
}

pub fn mock_skill_gaps() -> Vec<SkillGap> {
    [("AWS", 45), ("Docker", 30), ("React", 20)]
        .into_iter()
        .map(|(skill, deficiency)| SkillGap {
            skill: skill.to_string(),
            deficiency,
        })
        .collect()
}

/// GET /api/analytics/placement-stats
pub async fn handle_placement_stats() -> Json<PlacementStats> {
    Json(mock_placement_stats())
}

/// GET /api/analytics/skill-gaps
pub async fn handle_skill_gaps() -> Json<Vec<SkillGap>> {
    Json(mock_skill_gaps())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::models::account::Role;
    use crate::testing::{send, TestApp};

    #[tokio::test]
    async fn test_placement_stats_shape() {
        let app = TestApp::new();
        let (status, body) =
            send(&app.state, "GET", "/api/analytics/placement-stats", None, None).await;

        assert_eq!(status, StatusCode::OK);
        for key in [
            "totalStudents",
            "placedStudents",
            "averagePackage",
            "highestPackage",
            "placementRate",
        ] {
            assert!(body.get(key).is_some(), "missing {key}");
        }
        assert_eq!(body["placementRate"]["CSE"], 95);
    }

    #[tokio::test]
    async fn test_stats_ignore_stored_data() {
        let app = TestApp::new();
        let (_, before) =
            send(&app.state, "GET", "/api/analytics/placement-stats", None, None).await;

        let (_, hr) = app.account("hr@acme.com", Role::CompanyHr).await;
        let (_, student) = app.account("s@uni.edu", Role::Student).await;
        let (_, job) = send(&app.state, "POST", "/api/jobs", Some(&hr), Some(json!({}))).await;
        send(
            &app.state,
            "POST",
            &format!("/api/applications/{}/apply", job["id"]),
            Some(&student),
            None,
        )
        .await;

        let (_, after) =
            send(&app.state, "GET", "/api/analytics/placement-stats", None, None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_skill_gaps_payload() {
        let app = TestApp::new();
        let (status, body) = send(&app.state, "GET", "/api/analytics/skill-gaps", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "skill": "AWS", "deficiency": 45 },
                { "skill": "Docker", "deficiency": 30 },
                { "skill": "React", "deficiency": 20 }
            ])
        );
    }
}
