use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres URL. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
    /// Base URL of the resume-analysis engine, without the endpoint path.
    pub ai_engine_url: String,
    /// Bound on the outbound analysis call. `None` waits indefinitely.
    pub analysis_timeout: Option<Duration>,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_expiry_hours: parse_env("JWT_EXPIRY_HOURS", 24)?,
            bcrypt_cost: parse_env("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            ai_engine_url: optional_env("AI_ENGINE_URL")
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
            analysis_timeout: optional_env("ANALYSIS_TIMEOUT_SECS")
                .map(|v| {
                    v.parse::<u64>()
                        .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?
                .map(Duration::from_secs),
            upload_dir: PathBuf::from(
                optional_env("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string()),
            ),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Blank values count as unset.
fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u16 = parse_env("PLACEMENT_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_blank_required_value_is_rejected() {
        std::env::set_var("PLACEMENT_TEST_BLANK_SECRET", "");
        assert!(require_env("PLACEMENT_TEST_BLANK_SECRET").is_err());

        std::env::set_var("PLACEMENT_TEST_SPACES_SECRET", "   ");
        assert!(require_env("PLACEMENT_TEST_SPACES_SECRET").is_err());

        std::env::set_var("PLACEMENT_TEST_REAL_SECRET", "s3cret");
        assert_eq!(require_env("PLACEMENT_TEST_REAL_SECRET").unwrap(), "s3cret");
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PLACEMENT_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_env("PLACEMENT_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }
}
