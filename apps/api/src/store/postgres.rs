use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::PlacementStore;
use crate::errors::AppError;
use crate::models::account::{Account, NewAccount};
use crate::models::application::Application;
use crate::models::job::{JobPosting, NewJobPosting};
use crate::models::student_profile::{ProfileUpdate, StudentProfile};
use crate::models::UnknownVariant;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

// Enum columns are TEXT; rows are decoded as strings and parsed on the way out.

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password: String,
    role: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AppError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: row.id,
            email: row.email,
            password_hash: row.password,
            role: row.role.parse().map_err(corrupt)?,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    title: Option<String>,
    company_name: Option<String>,
    description: Option<String>,
    required_skills: Option<String>,
    salary_range: Option<String>,
    location: Option<String>,
    posted_by: i64,
    created_at: DateTime<Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id,
            title: row.title,
            company_name: row.company_name,
            description: row.description,
            required_skills: row.required_skills,
            salary_range: row.salary_range,
            location: row.location,
            posted_by: row.posted_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ApplicationRow {
    id: i64,
    job_id: i64,
    student_id: i64,
    status: String,
    applied_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = AppError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(Application {
            id: row.id,
            job_id: row.job_id,
            student_id: row.student_id,
            status: row.status.parse().map_err(corrupt)?,
            applied_at: row.applied_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    user_id: i64,
    resume_url: Option<String>,
    skills: Option<String>,
    cgpa: Option<f64>,
    department: Option<String>,
    graduation_year: Option<i32>,
    placement_status: String,
}

impl TryFrom<ProfileRow> for StudentProfile {
    type Error = AppError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(StudentProfile {
            id: row.id,
            user_id: row.user_id,
            resume_url: row.resume_url,
            skills: row.skills,
            cgpa: row.cgpa,
            department: row.department,
            graduation_year: row.graduation_year,
            placement_status: row.placement_status.parse().map_err(corrupt)?,
        })
    }
}

fn corrupt(err: UnknownVariant) -> AppError {
    AppError::Internal(anyhow::anyhow!("corrupt row: {err}"))
}

fn constraint_code(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}

/// Postgres-backed store. All queries are runtime-checked so the crate
/// builds without a live database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlacementStore for PgStore {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO users (email, password, role, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match constraint_code(&e).as_deref() {
            Some(UNIQUE_VIOLATION) => {
                AppError::Conflict(format!("Email {} is already registered", account.email))
            }
            _ => AppError::Database(e),
        })?;
        row.try_into()
    }

    async fn find_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        sqlx::query_as::<_, AccountRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Account::try_from)
            .transpose()
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        sqlx::query_as::<_, AccountRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(Account::try_from)
            .transpose()
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn list_jobs_by_company(&self, fragment: &str) -> Result<Vec<JobPosting>, AppError> {
        // strpos avoids treating % and _ in the fragment as LIKE wildcards
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE strpos(company_name, $1) > 0",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn find_job(&self, id: i64) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(JobPosting::from))
    }

    async fn create_job(
        &self,
        posting: NewJobPosting,
        posted_by: i64,
    ) -> Result<JobPosting, AppError> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs
                (title, company_name, description, required_skills,
                 salary_range, location, posted_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&posting.title)
        .bind(&posting.company_name)
        .bind(&posting.description)
        .bind(&posting.required_skills)
        .bind(&posting.salary_range)
        .bind(&posting.location)
        .bind(posted_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match constraint_code(&e).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound(format!("Account {posted_by} not found"))
            }
            _ => AppError::Database(e),
        })?;
        Ok(row.into())
    }

    async fn create_application(
        &self,
        job_id: i64,
        student_id: i64,
    ) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (job_id, student_id, status)
            VALUES ($1, $2, 'APPLIED')
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match constraint_code(&e).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => AppError::NotFound(format!("Job {job_id} not found")),
            _ => AppError::Database(e),
        })?;
        row.try_into()
    }

    async fn list_applications_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Application>, AppError> {
        sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE student_id = $1")
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Application::try_from)
            .collect()
    }

    async fn list_applications_for_job(&self, job_id: i64) -> Result<Vec<Application>, AppError> {
        sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE job_id = $1")
            .bind(job_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Application::try_from)
            .collect()
    }

    async fn find_profile_by_user(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>, AppError> {
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM student_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(StudentProfile::try_from)
            .transpose()
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        update: ProfileUpdate,
    ) -> Result<StudentProfile, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO student_profiles
                (user_id, resume_url, skills, cgpa, department,
                 graduation_year, placement_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                resume_url = EXCLUDED.resume_url,
                skills = EXCLUDED.skills,
                cgpa = EXCLUDED.cgpa,
                department = EXCLUDED.department,
                graduation_year = EXCLUDED.graduation_year,
                placement_status = EXCLUDED.placement_status
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&update.resume_url)
        .bind(&update.skills)
        .bind(update.cgpa)
        .bind(&update.department)
        .bind(update.graduation_year)
        .bind(update.placement_status.unwrap_or_default().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match constraint_code(&e).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound(format!("Account {user_id} not found"))
            }
            _ => AppError::Database(e),
        })?;
        row.try_into()
    }
}
