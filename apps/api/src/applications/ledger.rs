//! Application ledger: links students to job postings.
//!
//! Applying is not deduplicated. Two calls for the same (job, student) pair,
//! sequential or concurrent, create two independent `APPLIED` rows.

use std::collections::HashMap;

use tracing::info;

use crate::auth::{require, Operation, Principal};
use crate::errors::AppError;
use crate::models::account::{AccountSummary, Role};
use crate::models::application::{Application, ApplicationView};
use crate::models::job::JobPosting;
use crate::store::PlacementStore;

/// Records a new application by `principal` for `job_id`.
pub async fn apply(
    store: &dyn PlacementStore,
    principal: &Principal,
    job_id: i64,
) -> Result<Application, AppError> {
    require(principal, Operation::ApplyToJob)?;

    store
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let application = store.create_application(job_id, principal.id()).await?;
    info!(
        "Account {} applied to job {job_id} (application {})",
        principal.id(),
        application.id
    );
    Ok(application)
}

/// Every application the principal has made, in no guaranteed order.
pub async fn my_applications(
    store: &dyn PlacementStore,
    principal: &Principal,
) -> Result<Vec<ApplicationView>, AppError> {
    require(principal, Operation::ListMyApplications)?;

    let applications = store.list_applications_for_student(principal.id()).await?;
    resolve_views(store, applications).await
}

/// Applications received by one posting. Company HR may only inspect postings
/// they created; officers and the principal see every posting.
pub async fn applications_for_job(
    store: &dyn PlacementStore,
    principal: &Principal,
    job_id: i64,
) -> Result<Vec<ApplicationView>, AppError> {
    require(principal, Operation::ListJobApplications)?;

    let job = store
        .find_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    if principal.role() == Role::CompanyHr && job.posted_by != principal.id() {
        return Err(AppError::Forbidden);
    }

    let applications = store.list_applications_for_job(job_id).await?;
    resolve_views(store, applications).await
}

/// Expands stored foreign keys into full job and student records.
/// Each distinct job and account is loaded once.
async fn resolve_views(
    store: &dyn PlacementStore,
    applications: Vec<Application>,
) -> Result<Vec<ApplicationView>, AppError> {
    let mut jobs: HashMap<i64, JobPosting> = HashMap::new();
    let mut students: HashMap<i64, AccountSummary> = HashMap::new();
    let mut views = Vec::with_capacity(applications.len());

    for application in applications {
        if !jobs.contains_key(&application.job_id) {
            let job = store.find_job(application.job_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Job {} not found", application.job_id))
            })?;
            jobs.insert(job.id, job);
        }
        if !students.contains_key(&application.student_id) {
            let account = store
                .find_account(application.student_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Account {} not found", application.student_id))
                })?;
            students.insert(account.id, AccountSummary::from(&account));
        }

        views.push(ApplicationView {
            id: application.id,
            job: jobs[&application.job_id].clone(),
            student: students[&application.student_id].clone(),
            status: application.status,
            applied_at: application.applied_at,
        });
    }

    Ok(views)
}
