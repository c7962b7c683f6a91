//! Axum route handlers for the caller's own student profile.

use axum::{extract::State, Json};
use tracing::info;

use crate::auth::{require, Operation, Principal};
use crate::errors::AppError;
use crate::models::student_profile::{ProfileUpdate, StudentProfile};
use crate::state::AppState;

/// GET /api/profile/me
pub async fn handle_get_profile(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<StudentProfile>, AppError> {
    require(&principal, Operation::ViewOwnProfile)?;

    let profile = state
        .store
        .find_profile_by_user(principal.id())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No profile for account {}", principal.id()))
        })?;
    Ok(Json(profile))
}

/// PUT /api/profile/me
///
/// Creates the profile on first call and replaces it afterwards.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    principal: Principal,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<StudentProfile>, AppError> {
    require(&principal, Operation::UpdateOwnProfile)?;

    if update.cgpa.is_some_and(|cgpa| !cgpa.is_finite() || cgpa < 0.0) {
        return Err(AppError::Validation("cgpa must be a non-negative number".to_string()));
    }

    let profile = state.store.upsert_profile(principal.id(), update).await?;
    info!("Account {} saved profile {}", principal.id(), profile.id);
    Ok(Json(profile))
}
