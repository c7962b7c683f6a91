//! Repository seam over the relational schema.
//!
//! `AppState` holds an `Arc<dyn PlacementStore>`; `PgStore` backs production,
//! `MemoryStore` backs tests and database-less local runs. Both enforce the
//! same constraints: unique email, one profile per account, and foreign keys
//! on jobs and applications. Duplicate (job, student) applications are allowed.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::account::{Account, NewAccount};
use crate::models::application::Application;
use crate::models::job::{JobPosting, NewJobPosting};
use crate::models::student_profile::{ProfileUpdate, StudentProfile};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait PlacementStore: Send + Sync {
    /// Fails with `Conflict` when the email is already registered.
    async fn create_account(&self, account: NewAccount) -> Result<Account, AppError>;

    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError>;

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// All postings, in no guaranteed order.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    /// Postings whose company name contains `fragment` (case-sensitive).
    async fn list_jobs_by_company(&self, fragment: &str) -> Result<Vec<JobPosting>, AppError>;

    async fn find_job(&self, id: i64) -> Result<Option<JobPosting>, AppError>;

    async fn create_job(&self, posting: NewJobPosting, posted_by: i64)
        -> Result<JobPosting, AppError>;

    /// Inserts a fresh row with status `APPLIED` and `applied_at = now`.
    async fn create_application(
        &self,
        job_id: i64,
        student_id: i64,
    ) -> Result<Application, AppError>;

    async fn list_applications_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Application>, AppError>;

    async fn list_applications_for_job(&self, job_id: i64) -> Result<Vec<Application>, AppError>;

    async fn find_profile_by_user(&self, user_id: i64)
        -> Result<Option<StudentProfile>, AppError>;

    /// Creates the account's profile or overwrites the existing one.
    async fn upsert_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<StudentProfile, AppError>;
}
