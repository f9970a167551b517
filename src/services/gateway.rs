//! Backend API gateway client
//!
//! A single reqwest-based client for the Campus backend API. Every response
//! arrives wrapped in the uniform `{success, data, message}` envelope; the
//! gateway decodes the envelope and maps failures into the `AppError`
//! taxonomy. The gateway does not retry and does not cache; callers own
//! retry policy and error presentation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::utils::{AppError, AppResult};

/// Uniform response wrapper used by every backend call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Anything but `true` is a failure, regardless of HTTP status nuances
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, converting a reported failure into an error.
    ///
    /// `data` is meaningful only when `success` is true; on failure it is
    /// ignored entirely and only `message` is consulted.
    pub fn into_result(self) -> AppResult<T> {
        if !self.success {
            return Err(AppError::Application(self.failure_message()));
        }
        self.data
            .ok_or_else(|| AppError::Transport("envelope is missing data".to_string()))
    }

    /// Unwrap an acknowledgement envelope that carries no payload
    pub fn into_ack(self) -> AppResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Application(self.failure_message()))
        }
    }

    fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "The operation failed".to_string())
    }
}

/// Campus backend API client
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    /// Create a new gateway with the configured timeout and credentials
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        info!("Initializing API gateway for {}", config.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| anyhow::anyhow!("auth token contains invalid header characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .use_rustls_tls()
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a collection or record; `query` is a pre-encoded query string
    /// (empty or starting with `?`)
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &str) -> AppResult<T> {
        let url = format!("{}{}{}", self.base_url, path, query);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response, path).await
    }

    /// POST a payload and decode the enveloped record
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response, path).await
    }

    /// PUT a payload and decode the enveloped record
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        self.handle_response(response, path).await
    }

    /// DELETE a record; the envelope carries no payload
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, path, "delete failed");
            return Err(AppError::Transport(format!(
                "request failed with status {}: {}",
                status, body
            )));
        }
        let body = response.text().await.map_err(AppError::from)?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| AppError::Transport(format!("malformed envelope: {}", e)))?;
        envelope.into_ack()
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        path: &str,
    ) -> AppResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, path, "request failed");
            return Err(AppError::Transport(format!(
                "request failed with status {}: {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(AppError::from)?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            // Truncate body for logging if too long
            let truncated: String = body.chars().take(500).collect();
            warn!(path, body = %truncated, "malformed envelope");
            AppError::Transport(format!("malformed envelope: {}", e))
        })?;
        envelope.into_result()
    }
}
