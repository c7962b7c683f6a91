//! Shared fixtures for handler tests: in-memory state, bearer tokens and a
//! request helper that drives the real router.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::auth::TokenKeys;
use crate::config::Config;
use crate::models::account::{Account, NewAccount, Role};
use crate::resume::analyzer::{AnalyzerError, ResumeAnalyzer};
use crate::resume::storage::ResumeStorage;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MemoryStore;

const TEST_SECRET: &str = "test-secret";

/// Analyzer that answers every request with a fixed result.
pub struct StubAnalyzer {
    pub reply: Result<String, u16>,
}

#[async_trait]
impl ResumeAnalyzer for StubAnalyzer {
    async fn analyze(&self, _path: &Path, _filename: &str) -> Result<String, AnalyzerError> {
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(AnalyzerError::Status {
                status: *status,
                body: "engine failure".to_string(),
            }),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    // Dropping the directory removes stored uploads.
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StubAnalyzer {
            reply: Ok("OK:42".to_string()),
        }))
    }

    pub fn with_analyzer(analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        let upload_dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            database_url: None,
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiry_hours: 1,
            bcrypt_cost: 4,
            ai_engine_url: "http://127.0.0.1:1".to_string(),
            analysis_timeout: None,
            upload_dir: upload_dir.path().to_path_buf(),
            port: 0,
            rust_log: "debug".to_string(),
        };
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            analyzer,
            storage: ResumeStorage::new(upload_dir.path()),
            tokens: TokenKeys::new(TEST_SECRET, 1),
            config,
        };
        Self { state, upload_dir }
    }

    /// Registers an account directly in the store and returns it with a valid token.
    pub async fn account(&self, email: &str, role: Role) -> (Account, String) {
        let account = self
            .state
            .store
            .create_account(NewAccount {
                email: email.to_string(),
                password_hash: "unused".to_string(),
                role,
                first_name: None,
                last_name: None,
            })
            .await
            .expect("create account");
        let token = self.state.tokens.issue(&account).expect("issue token");
        (account, token)
    }

    /// A correctly signed token whose subject has no stored account.
    pub fn token_for_email(&self, email: &str, role: Role) -> String {
        let phantom = Account {
            id: -1,
            email: email.to_string(),
            password_hash: String::new(),
            role,
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
        };
        self.state.tokens.issue(&phantom).expect("issue token")
    }

    pub fn stored_upload_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Sends one JSON request through the router. Non-JSON bodies come back as a string value.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    dispatch(state, request).await
}

/// Sends a multipart/form-data request with a single file part.
pub async fn send_file(
    state: &AppState,
    uri: &str,
    token: Option<&str>,
    field: &str,
    filename: &str,
    contents: &[u8],
) -> (StatusCode, Value) {
    let boundary = "placement-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let mut builder = Request::builder().method("POST").uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={boundary}"),
    );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body)).expect("request");

    dispatch(state, request).await
}

async fn dispatch(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}
