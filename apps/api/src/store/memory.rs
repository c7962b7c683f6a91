use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::PlacementStore;
use crate::errors::AppError;
use crate::models::account::{Account, NewAccount};
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::{JobPosting, NewJobPosting};
use crate::models::student_profile::{ProfileUpdate, StudentProfile};

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    jobs: Vec<JobPosting>,
    applications: Vec<Application>,
    profiles: Vec<StudentProfile>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn account_exists(&self, id: i64) -> bool {
        self.accounts.iter().any(|a| a.id == id)
    }
}

/// In-process store with the same constraints as the Postgres schema.
/// Ids come from one shared sequence, so they are unique across tables.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlacementStore for MemoryStore {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AppError> {
        let mut tables = self.tables.lock().await;
        if tables.accounts.iter().any(|a| a.email == account.email) {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                account.email
            )));
        }
        let stored = Account {
            id: tables.next_id(),
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
            first_name: account.first_name,
            last_name: account.last_name,
            created_at: Utc::now(),
        };
        tables.accounts.push(stored.clone());
        Ok(stored)
    }

    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.tables.lock().await.jobs.clone())
    }

    async fn list_jobs_by_company(&self, fragment: &str) -> Result<Vec<JobPosting>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .jobs
            .iter()
            .filter(|j| {
                j.company_name
                    .as_deref()
                    .is_some_and(|name| name.contains(fragment))
            })
            .cloned()
            .collect())
    }

    async fn find_job(&self, id: i64) -> Result<Option<JobPosting>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn create_job(
        &self,
        posting: NewJobPosting,
        posted_by: i64,
    ) -> Result<JobPosting, AppError> {
        let mut tables = self.tables.lock().await;
        if !tables.account_exists(posted_by) {
            return Err(AppError::NotFound(format!("Account {posted_by} not found")));
        }
        let stored = JobPosting {
            id: tables.next_id(),
            title: posting.title,
            company_name: posting.company_name,
            description: posting.description,
            required_skills: posting.required_skills,
            salary_range: posting.salary_range,
            location: posting.location,
            posted_by,
            created_at: Utc::now(),
        };
        tables.jobs.push(stored.clone());
        Ok(stored)
    }

    async fn create_application(
        &self,
        job_id: i64,
        student_id: i64,
    ) -> Result<Application, AppError> {
        let mut tables = self.tables.lock().await;
        if !tables.jobs.iter().any(|j| j.id == job_id) {
            return Err(AppError::NotFound(format!("Job {job_id} not found")));
        }
        if !tables.account_exists(student_id) {
            return Err(AppError::NotFound(format!("Account {student_id} not found")));
        }
        let stored = Application {
            id: tables.next_id(),
            job_id,
            student_id,
            status: ApplicationStatus::Applied,
            applied_at: Utc::now(),
        };
        tables.applications.push(stored.clone());
        Ok(stored)
    }

    async fn list_applications_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Application>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .applications
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_applications_for_job(&self, job_id: i64) -> Result<Vec<Application>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn find_profile_by_user(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<StudentProfile, AppError> {
        let mut tables = self.tables.lock().await;
        if !tables.account_exists(user_id) {
            return Err(AppError::NotFound(format!("Account {user_id} not found")));
        }
        let existing = tables.profiles.iter().position(|p| p.user_id == user_id);
        let id = match existing {
            Some(index) => tables.profiles[index].id,
            None => tables.next_id(),
        };
        let profile = StudentProfile {
            id,
            user_id,
            resume_url: update.resume_url,
            skills: update.skills,
            cgpa: update.cgpa,
            department: update.department,
            graduation_year: update.graduation_year,
            placement_status: update.placement_status.unwrap_or_default(),
        };
        match existing {
            Some(index) => tables.profiles[index] = profile.clone(),
            None => tables.profiles.push(profile.clone()),
        }
        Ok(profile)
    }
}
