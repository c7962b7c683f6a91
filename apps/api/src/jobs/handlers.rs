//! Axum route handlers for the job catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::auth::{require, Operation, Principal};
use crate::errors::AppError;
use crate::models::job::{JobPosting, NewJobPosting};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobFilter {
    /// Substring of the company name.
    pub company: Option<String>,
}

/// GET /api/jobs
///
/// Public. No pagination and no ordering guarantee.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = match filter.company.as_deref() {
        Some(company) => state.store.list_jobs_by_company(company).await?,
        None => state.store.list_jobs().await?,
    };
    Ok(Json(jobs))
}

/// POST /api/jobs
///
/// Stores the posting as given, with `postedBy` forced to the caller.
pub async fn handle_create_job(
    State(state): State<AppState>,
    principal: Principal,
    Json(posting): Json<NewJobPosting>,
) -> Result<Json<JobPosting>, AppError> {
    require(&principal, Operation::CreateJob)?;

    let job = state.store.create_job(posting, principal.id()).await?;

    info!("Account {} posted job {}", principal.id(), job.id);
    Ok(Json(job))
}
