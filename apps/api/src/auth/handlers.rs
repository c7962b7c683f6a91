//! Axum route handlers for signup and signin.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::account::{NewAccount, Role};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<Value>, AppError> {
    let email = request.email.trim().to_string();
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }

    let password_hash = hash_password(request.password, state.config.bcrypt_cost).await?;
    let account = state
        .store
        .create_account(NewAccount {
            email,
            password_hash,
            role: request.role,
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await?;

    info!("Registered account {} as {}", account.id, account.role);
    Ok(Json(json!({ "message": "User registered successfully!" })))
}

/// POST /api/auth/signin
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn handle_signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    let account = state
        .store
        .find_account_by_email(request.email.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(request.password, account.password_hash.clone()).await? {
        tracing::warn!("Failed signin for account {}", account.id);
        return Err(AppError::Unauthorized);
    }

    let access_token = state.tokens.issue(&account)?;
    Ok(Json(SigninResponse {
        access_token,
        token_type: "Bearer",
        id: account.id,
        email: account.email,
        first_name: account.first_name,
        last_name: account.last_name,
        roles: vec![account.role],
    }))
}
