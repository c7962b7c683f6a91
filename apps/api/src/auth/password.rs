use anyhow::anyhow;

use crate::errors::AppError;

// bcrypt is CPU-bound; both calls run on the blocking pool.

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(anyhow!("password hashing task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow!("password hashing failed: {e}")))
}

/// Returns false for a wrong password and for a malformed stored hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow!("password verification task failed: {e}")))?;
    Ok(verified.unwrap_or(false))
}
