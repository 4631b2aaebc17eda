//! Route handlers for the web interface.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use super::server::AppState;
use crate::core::entry::{is_supported_language, NewEntry, QaEntry};
use crate::core::search;
use crate::core::store::KbStats;
use crate::remote::{AddResponse, AskRequest, AskResponse, EntriesQuery, HealthResponse};

/// JSON error body with a status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let entries = state.store.lock().await.len();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Rank answers for a question; zero-score results are dropped.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = body.question.trim().to_string();
    if question.is_empty() {
        return Err(ApiError::bad_request("Please enter a question"));
    }

    let top_k = body.top_k.unwrap_or(state.top_k);
    let results = {
        let store = state.store.lock().await;
        search::relevant(store.search_answers(&question, top_k))
    };

    let message = if results.is_empty() {
        "No relevant answers found. Try a different question or add new knowledge to the system."
            .to_string()
    } else {
        format!("Found {} relevant answer(s)", results.len())
    };

    Ok(Json(AskResponse {
        question,
        results,
        message,
    }))
}

/// Add a Q&A pair and rewrite the save file.
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewEntry>,
) -> Result<Json<AddResponse>, ApiError> {
    let required = [&body.language, &body.question, &body.answer];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::bad_request(
            "All fields (language, question, answer) are required",
        ));
    }

    if !is_supported_language(body.language.trim(), &state.supported_languages) {
        return Err(ApiError::bad_request(format!(
            "Unsupported language. Supported: {}",
            state.supported_languages.join(", ")
        )));
    }

    let mut store = state.store.lock().await;
    let entry = store
        .add(body)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    if let Err(e) = store.save(&state.save_file) {
        error!(%e, path = %state.save_file.display(), "failed to save knowledge base");
        return Err(ApiError::internal(format!(
            "Failed to save knowledge base: {}",
            e
        )));
    }

    info!(id = entry.id, "Q&A pair added via web");
    Ok(Json(AddResponse {
        success: true,
        message: "Q&A pair added successfully!".to_string(),
        id: Some(entry.id),
    }))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<KbStats> {
    Json(state.store.lock().await.statistics())
}

pub async fn entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntriesQuery>,
) -> Json<Vec<QaEntry>> {
    let store = state.store.lock().await;
    Json(store.filter(query.language.as_deref(), query.category.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::store::KnowledgeStore;

    fn test_state(save_file: std::path::PathBuf) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(
            KnowledgeStore::with_sample_data(),
            &Config::default(),
            save_file,
        )))
    }

    fn temp_state() -> (tempfile::TempDir, State<Arc<AppState>>) {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path().join("web_knowledge_base.json"));
        (dir, state)
    }

    fn new_entry(language: &str, question: &str, answer: &str) -> Json<NewEntry> {
        Json(NewEntry::new(language, question, answer))
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, state) = temp_state();
        let json = health(state).await.0;
        assert_eq!(json.status, "ok");
        assert_eq!(json.entries, 10);
    }

    #[tokio::test]
    async fn test_ask_empty_question() {
        let (_dir, state) = temp_state();
        let body = Json(AskRequest {
            question: "   ".to_string(),
            top_k: None,
        });
        let err = ask(state, body).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Please enter a question");
    }

    #[tokio::test]
    async fn test_ask_returns_relevant_results() {
        let (_dir, state) = temp_state();
        let body = Json(AskRequest {
            question: " What is artificial intelligence? ".to_string(),
            top_k: None,
        });
        let resp = ask(state, body).await.unwrap().0;
        assert_eq!(resp.question, "What is artificial intelligence?");
        assert!(!resp.results.is_empty());
        assert!(resp.results.len() <= 5);
        assert_eq!(resp.results[0].entry.id, 1);
        assert!(resp.results.iter().all(|r| r.similarity_score > 0.0));
        assert_eq!(
            resp.message,
            format!("Found {} relevant answer(s)", resp.results.len())
        );
    }

    #[tokio::test]
    async fn test_ask_no_match() {
        let (_dir, state) = temp_state();
        let body = Json(AskRequest {
            question: "zzz qqq".to_string(),
            top_k: None,
        });
        let resp = ask(state, body).await.unwrap().0;
        assert!(resp.results.is_empty());
        assert!(resp.message.starts_with("No relevant answers found."));
    }

    #[tokio::test]
    async fn test_add_missing_fields() {
        let (_dir, state) = temp_state();
        let err = add(state, new_entry("en", "", "A")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "All fields (language, question, answer) are required"
        );
    }

    #[tokio::test]
    async fn test_add_unsupported_language() {
        let (dir, state) = temp_state();
        let err = add(state, new_entry("pt", "Q", "A")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Unsupported language. Supported: en, es, fr, de, hi, zh, ar, ja"
        );
        assert!(!dir.path().join("web_knowledge_base.json").exists());
    }

    #[tokio::test]
    async fn test_add_saves_and_is_searchable() {
        let (dir, state) = temp_state();
        let resp = add(
            state.clone(),
            new_entry(
                "en",
                "What is the Internet of Things?",
                "IoT refers to the network of physical devices embedded with sensors.",
            ),
        )
        .await
        .unwrap()
        .0;
        assert!(resp.success);
        assert_eq!(resp.id, Some(11));

        let saved = KnowledgeStore::open(&dir.path().join("web_knowledge_base.json")).unwrap();
        assert_eq!(saved.len(), 11);
        assert_eq!(saved.get(11).map(|e| e.category.as_str()), Some("General"));

        let stats = stats(state.clone()).await.0;
        assert_eq!(stats.total_entries, 11);

        let body = Json(AskRequest {
            question: "Internet Things IoT devices".to_string(),
            top_k: Some(1),
        });
        let resp = ask(state, body).await.unwrap().0;
        assert_eq!(resp.results[0].entry.id, 11);
    }

    #[tokio::test]
    async fn test_add_save_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        // a directory in place of the file makes the write fail
        let state = test_state(dir.path().to_path_buf());
        let err = add(state, new_entry("en", "Q", "A")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_stats() {
        let (_dir, state) = temp_state();
        let json = stats(state).await.0;
        assert_eq!(json.total_entries, 10);
        assert_eq!(json.categories.get("Technology"), Some(&10));
    }

    #[tokio::test]
    async fn test_entries_filter() {
        let (_dir, state) = temp_state();
        let query = Query(EntriesQuery {
            language: Some("ja".to_string()),
            category: None,
        });
        let list = entries(state, query).await.0;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 10);
    }
}
