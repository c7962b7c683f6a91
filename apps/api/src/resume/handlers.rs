//! Axum route handler for resume upload.

use axum::extract::{Multipart, State};
use bytes::Bytes;
use tracing::info;

use crate::auth::{require, Operation, Principal};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart part carrying the resume.
const FILE_FIELD: &str = "file";

/// Upper bound for an uploaded resume, applied as the route's body limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/resume/upload
///
/// Stores the file, then forwards it to the analysis engine and passes the
/// engine's body through. Both failure modes answer 500 with a plain-text
/// message naming the original file.
pub async fn handle_upload(
    State(state): State<AppState>,
    principal: Principal,
    multipart: Multipart,
) -> Result<String, AppError> {
    require(&principal, Operation::UploadResume)?;

    let (filename, data) = read_file_part(multipart).await?;

    let stored = state
        .storage
        .save(&filename, &data)
        .await
        .map_err(|e| AppError::Upload {
            filename: filename.clone(),
            message: e.to_string(),
        })?;
    info!(
        "Stored resume {filename} ({} bytes) for account {} at {}",
        data.len(),
        principal.id(),
        stored.display()
    );

    let analysis = state
        .analyzer
        .analyze(&stored, &filename)
        .await
        .map_err(|e| AppError::Analysis {
            filename: filename.clone(),
            message: e.to_string(),
        })?;

    Ok(format!("Resume uploaded and analyzed: {analysis}"))
}

/// Returns the original filename and contents of the `file` part.
async fn read_file_part(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload {
                filename: filename.clone(),
                message: e.to_string(),
            })?;
        return Ok((filename, data));
    }
    Err(AppError::Validation(format!(
        "required part '{FILE_FIELD}' is not present"
    )))
}
