//! Axum route handlers for the application ledger.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::applications::ledger;
use crate::auth::Principal;
use crate::errors::AppError;
use crate::models::application::ApplicationView;
use crate::state::AppState;

/// POST /api/applications/:job_id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    principal: Principal,
    Path(job_id): Path<i64>,
) -> Result<&'static str, AppError> {
    ledger::apply(state.store.as_ref(), &principal, job_id).await?;
    Ok("Applied successfully!")
}

/// GET /api/applications/my-applications
pub async fn handle_my_applications(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    let views = ledger::my_applications(state.store.as_ref(), &principal).await?;
    Ok(Json(views))
}

/// GET /api/jobs/:job_id/applications
pub async fn handle_job_applications(
    State(state): State<AppState>,
    principal: Principal,
    Path(job_id): Path<i64>,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    let views = ledger::applications_for_job(state.store.as_ref(), &principal, job_id).await?;
    Ok(Json(views))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::models::account::Role;
    use crate::testing::{send, TestApp};

    async fn post_job(app: &TestApp, token: &str) -> i64 {
        let (_, body) = send(
            &app.state,
            "POST",
            "/api/jobs",
            Some(token),
            Some(json!({ "title": "SDE", "companyName": "Acme" })),
        )
        .await;
        body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_apply_and_list_round_trip() {
        let app = TestApp::new();
        let (_, hr) = app.account("hr@acme.com", Role::CompanyHr).await;
        let (student, token) = app.account("s@uni.edu", Role::Student).await;
        let job_id = post_job(&app, &hr).await;

        let (status, body) = send(
            &app.state,
            "POST",
            &format!("/api/applications/{job_id}/apply"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("Applied successfully!".to_string()));

        let (status, body) = send(
            &app.state,
            "GET",
            "/api/applications/my-applications",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["status"], "APPLIED");
        assert_eq!(rows[0]["job"]["id"], job_id);
        assert_eq!(rows[0]["job"]["title"], "SDE");
        assert_eq!(rows[0]["student"]["id"], student.id);
        assert!(rows[0]["student"].get("passwordHash").is_none());
        assert!(rows[0]["appliedAt"].is_string());
    }

    #[tokio::test]
    async fn test_apply_to_unknown_job_is_not_found() {
        let app = TestApp::new();
        let (_, token) = app.account("s@uni.edu", Role::Student).await;

        let (status, _) = send(
            &app.state,
            "POST",
            "/api/applications/77/apply",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(
            &app.state,
            "GET",
            "/api/applications/my-applications",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_officer_cannot_apply_or_list_own() {
        let app = TestApp::new();
        let (_, token) = app.account("tpo@uni.edu", Role::PlacementOfficer).await;
        let job_id = post_job(&app, &token).await;

        let (status, _) = send(
            &app.state,
            "POST",
            &format!("/api/applications/{job_id}/apply"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &app.state,
            "GET",
            "/api/applications/my-applications",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, body) = send(
            &app.state,
            "GET",
            &format!("/api/jobs/{job_id}/applications"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_job_applicants_listing() {
        let app = TestApp::new();
        let (_, hr) = app.account("hr@acme.com", Role::CompanyHr).await;
        let (_, principal) = app.account("principal@uni.edu", Role::Principal).await;
        let job_id = post_job(&app, &hr).await;
        for email in ["a@uni.edu", "b@uni.edu"] {
            let (_, token) = app.account(email, Role::Student).await;
            send(
                &app.state,
                "POST",
                &format!("/api/applications/{job_id}/apply"),
                Some(&token),
                None,
            )
            .await;
        }

        let (status, body) = send(
            &app.state,
            "GET",
            &format!("/api/jobs/{job_id}/applications"),
            Some(&principal),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, _) = send(
            &app.state,
            "GET",
            "/api/jobs/9999/applications",
            Some(&principal),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
