//! HTTP client for the translation backend.
//!
//! The backend exposes one route per model (`POST /translate/{model}`) and a
//! `GET /health` summary of which models loaded.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Model;

/// Request body for `POST /translate/{model}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub src_lang: String,
    pub tgt_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    translation: String,
}

/// Body of a 4xx/5xx response from the backend
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthReport {
    /// "healthy" when every model loaded, "unhealthy" otherwise
    pub status: String,

    /// Per-model status: "UP" or "DOWN - <reason>"
    pub models: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Names of the models that are not up.
    pub fn down_models(&self) -> Vec<&str> {
        self.models
            .iter()
            .filter(|(_, status)| status.as_str() != "UP")
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Failure talking to the translation backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to reach translation backend: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Translation backend error ({status}): {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Unexpected response from translation backend: {0}")]
    UnexpectedBody(String),
}

/// Client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: reqwest::Client,
    base_url: String,
}

impl TranslationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build a client with a request timeout on every call.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the translate route for a model.
    pub fn translate_url(&self, model: Model) -> String {
        format!("{}/translate/{}", self.base_url, model.code())
    }

    /// Translate text with the given model.
    ///
    /// Returns the `translation` field of a 2xx response. Any other status, or a
    /// 2xx body without a string `translation`, is an error.
    pub async fn translate(
        &self,
        model: Model,
        request: &TranslationRequest,
    ) -> Result<String, ClientError> {
        let url = self.translate_url(model);
        debug!(
            "POST {} ({} -> {}, {} chars)",
            url,
            request.src_lang,
            request.tgt_lang,
            request.text.chars().count()
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                message: error_message(&body),
            });
        }

        let parsed: TranslationResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::UnexpectedBody(format!("{} in {:?}", e, truncate(&body))))?;

        Ok(parsed.translation)
    }

    /// Fetch the backend's model health summary.
    ///
    /// The backend answers 500 when any model failed to load, with the same
    /// body shape as a 200, so both are returned as a report.
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::Network)?;

        let status_error = || ClientError::Status {
            status,
            message: error_message(&body),
        };

        if !status.is_success() && !status.is_server_error() {
            return Err(status_error());
        }

        match serde_json::from_str::<HealthReport>(&body) {
            Ok(report) => Ok(report),
            Err(_) if status.is_server_error() => Err(status_error()),
            Err(e) => Err(ClientError::UnexpectedBody(format!(
                "{} in {:?}",
                e,
                truncate(&body)
            ))),
        }
    }
}

/// Pull the backend's `{"error": ...}` message out of a body, or fall back to
/// the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => truncate(body).to_string(),
    }
}

fn truncate(body: &str) -> &str {
    const LIMIT: usize = 200;
    match body.char_indices().nth(LIMIT) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
