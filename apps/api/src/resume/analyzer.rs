//! Client for the external resume-analysis engine.
//!
//! The engine accepts `POST /analyze-resume` with a multipart `file` part and
//! returns an opaque body. No retries. The timeout is optional and unset by
//! default, in which case a hung engine blocks the request indefinitely.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub const ANALYZE_PATH: &str = "/analyze-resume";

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("could not read stored resume: {0}")]
    Read(#[from] std::io::Error),

    #[error("analysis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis engine returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Sends the stored file at `path` under `filename` and returns the raw response body.
    async fn analyze(&self, path: &Path, filename: &str) -> Result<String, AnalyzerError>;
}

#[derive(Clone)]
pub struct HttpResumeAnalyzer {
    client: Client,
    endpoint: String,
}

impl HttpResumeAnalyzer {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResumeAnalyzer for HttpResumeAnalyzer {
    async fn analyze(&self, path: &Path, filename: &str) -> Result<String, AnalyzerError> {
        let data = tokio::fs::read(path).await?;
        let part = Part::bytes(data).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalyzerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Analysis engine answered {} bytes for {filename}", body.len());
        Ok(body)
    }
}
