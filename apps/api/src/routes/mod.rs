pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::applications::handlers as applications;
use crate::auth::handlers as auth;
use crate::jobs::handlers as jobs;
use crate::profiles::handlers as profiles;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/signin", post(auth::handle_signin))
        // Job catalog
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/jobs/:job_id/applications",
            get(applications::handle_job_applications),
        )
        // Application ledger
        .route(
            "/api/applications/:job_id/apply",
            post(applications::handle_apply),
        )
        .route(
            "/api/applications/my-applications",
            get(applications::handle_my_applications),
        )
        // Student profile
        .route(
            "/api/profile/me",
            get(profiles::handle_get_profile).put(profiles::handle_put_profile),
        )
        // Resume intake
        .route(
            "/api/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(resume::MAX_UPLOAD_BYTES)),
        )
        // Analytics (static)
        .route(
            "/api/analytics/placement-stats",
            get(analytics::handle_placement_stats),
        )
        .route("/api/analytics/skill-gaps", get(analytics::handle_skill_gaps))
        .with_state(state)
}
