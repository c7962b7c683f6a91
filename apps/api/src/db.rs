use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Initial schema. Applied on every start; each statement is idempotent.
/// `applications` deliberately carries no (job_id, student_id) uniqueness.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id          BIGSERIAL PRIMARY KEY,
        email       TEXT NOT NULL UNIQUE,
        password    TEXT NOT NULL,
        role        TEXT NOT NULL,
        first_name  TEXT,
        last_name   TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id              BIGSERIAL PRIMARY KEY,
        title           TEXT,
        company_name    TEXT,
        description     TEXT,
        required_skills TEXT,
        salary_range    TEXT,
        location        TEXT,
        posted_by       BIGINT NOT NULL REFERENCES users(id),
        created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS applications (
        id          BIGSERIAL PRIMARY KEY,
        job_id      BIGINT NOT NULL REFERENCES jobs(id),
        student_id  BIGINT NOT NULL REFERENCES users(id),
        status      TEXT NOT NULL DEFAULT 'APPLIED',
        applied_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS student_profiles (
        id                BIGSERIAL PRIMARY KEY,
        user_id           BIGINT NOT NULL UNIQUE REFERENCES users(id),
        resume_url        TEXT,
        skills            TEXT,
        cgpa              DOUBLE PRECISION,
        department        TEXT,
        graduation_year   INTEGER,
        placement_status  TEXT NOT NULL DEFAULT 'NOT_PLACED'
    )
    "#,
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the four tables if they do not exist yet.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("failed to apply schema statement")?;
    }
    info!("Schema ready ({} tables)", SCHEMA.len());
    Ok(())
}
