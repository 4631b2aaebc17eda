//! Remote server HTTP client
//!
//! Async client for a running `lareqa serve` instance.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::types::*;
use crate::config::RemoteConfig;
use crate::core::entry::{NewEntry, QaEntry};
use crate::core::store::KbStats;

/// HTTP client for the lareqa web interface
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: Url,
}

impl RemoteClient {
    /// Create new client from remote config
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let url = config.url.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "No remote server configured.\n\
                 Set one with: lareqa config remote.url http://localhost:5000"
            )
        })?;

        Self::new(url, config.timeout_secs)
    }

    /// Create new client with explicit parameters
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid server URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }

    /// Check server health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url("/health")?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to connect to server")?;

        self.handle_response(resp).await
    }

    /// Ask a question; the server drops zero-score results
    pub async fn ask(&self, question: &str, top_k: Option<usize>) -> Result<AskResponse> {
        let url = self.url("/ask")?;
        debug!(%url, question, "remote ask");

        let req = AskRequest {
            question: question.to_string(),
            top_k,
        };

        let resp = self
            .client
            .post(url)
            .json(&req)
            .send()
            .await
            .context("Failed to ask question")?;

        self.handle_response(resp).await
    }

    /// Add a Q&A pair
    pub async fn add(&self, entry: &NewEntry) -> Result<AddResponse> {
        let url = self.url("/add")?;

        let resp = self
            .client
            .post(url)
            .json(entry)
            .send()
            .await
            .context("Failed to add Q&A pair")?;

        self.handle_response(resp).await
    }

    /// Knowledge base statistics
    pub async fn stats(&self) -> Result<KbStats> {
        let url = self.url("/stats")?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to get statistics")?;

        self.handle_response(resp).await
    }

    /// List entries, optionally filtered
    pub async fn entries(&self, query: &EntriesQuery) -> Result<Vec<QaEntry>> {
        let url = self.url("/entries")?;

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to list entries")?;

        self.handle_response(resp).await
    }

    /// Handle response and deserialize
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T> {
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            anyhow::bail!("Resource not found");
        }

        if !status.is_success() {
            let err = extract_error(resp).await;
            anyhow::bail!("API error ({}): {}", status, err);
        }

        resp.json().await.context("Failed to parse response")
    }
}

/// Extract error message from response
async fn extract_error(resp: reqwest::Response) -> String {
    match resp.json::<ApiErrorResponse>().await {
        Ok(err) => err.error,
        Err(_) => "Unknown error".to_string(),
    }
}
