//! Remote API types
//!
//! DTOs shared by the web interface and its HTTP client.

use serde::{Deserialize, Serialize};

use crate::core::search::SearchResult;

/// Body of `POST /ask`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

/// Response from `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub results: Vec<SearchResult>,
    pub message: String,
}

/// Response from `POST /add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Response from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(default)]
    pub entries: usize,
    #[serde(default)]
    pub uptime_secs: u64,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Query string of `GET /entries`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntriesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
