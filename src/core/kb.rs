//! Knowledge Base abstraction
//!
//! Provides a unified interface for local (in-memory + JSON file) and
//! remote (HTTP API) knowledge bases.
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         KnowledgeBase               │
//! │  ┌─────────────┬─────────────┐      │
//! │  │   LocalKb   │  RemoteKb   │      │
//! │  │   (Store)   │ (HTTP API)  │      │
//! │  └─────────────┴─────────────┘      │
//! └─────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::entry::{NewEntry, QaEntry};
use super::search::SearchResult;
use super::store::{KbStats, KnowledgeStore};
use crate::config::RemoteConfig;
use crate::remote::{EntriesQuery, RemoteClient};

/// Backend trait for knowledge base operations
#[async_trait]
pub trait KnowledgeBaseBackend: Send + Sync {
    /// Top `top_k` answers for a question, best first
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>>;

    /// Add a new Q&A pair
    async fn add_entry(&self, entry: NewEntry) -> Result<QaEntry>;

    /// Get statistics
    async fn stats(&self) -> Result<KbStats>;

    /// All entries, optionally filtered by language and category
    async fn entries(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<QaEntry>>;

    /// Human-readable name
    fn name(&self) -> &str;
}

/// Local knowledge base
///
/// Uses Mutex so the store can sit behind the async trait
pub struct LocalKb {
    store: Mutex<KnowledgeStore>,
    name: String,
    path: Option<PathBuf>,
}

impl LocalKb {
    /// Open a local KB backed by `path` (sample data if the file is missing)
    pub fn open(path: PathBuf) -> Result<Self> {
        let store = KnowledgeStore::open_or_seed(&path)
            .with_context(|| format!("Failed to open knowledge base {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("local")
            .to_string();

        Ok(Self {
            store: Mutex::new(store),
            name,
            path: Some(path),
        })
    }

    /// Sample data only, nothing is written to disk
    pub fn in_memory() -> Self {
        Self::from_store(KnowledgeStore::with_sample_data())
    }

    pub fn from_store(store: KnowledgeStore) -> Self {
        Self {
            store: Mutex::new(store),
            name: "sample".to_string(),
            path: None,
        }
    }

    /// Open `path` when given, otherwise use the sample data
    pub fn open_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::in_memory()),
        }
    }

    /// The data file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` with the store locked
    pub fn with_store<T>(&self, f: impl FnOnce(&mut KnowledgeStore) -> T) -> Result<T> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        Ok(f(&mut store))
    }
}

#[async_trait]
impl KnowledgeBaseBackend for LocalKb {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        self.with_store(|store| store.search_answers(query, top_k))
    }

    async fn add_entry(&self, entry: NewEntry) -> Result<QaEntry> {
        let path = self.path.clone();
        self.with_store(|store| -> Result<QaEntry> {
            let added = store.add(entry)?;
            if let Some(path) = &path {
                store.save(path)?;
            }
            Ok(added)
        })?
    }

    async fn stats(&self) -> Result<KbStats> {
        self.with_store(|store| store.statistics())
    }

    async fn entries(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<QaEntry>> {
        self.with_store(|store| store.filter(language, category))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Remote knowledge base (HTTP API)
pub struct RemoteKb {
    client: RemoteClient,
    name: String,
}

impl RemoteKb {
    pub fn new(server_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = RemoteClient::new(server_url, timeout_secs)?;
        Ok(Self {
            name: server_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Remote KB at `remote.url`
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let client = RemoteClient::from_config(config)?;
        Ok(Self {
            name: client.base_url().as_str().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the client for operations not in trait
    pub fn client(&self) -> &RemoteClient {
        &self.client
    }
}

#[async_trait]
impl KnowledgeBaseBackend for RemoteKb {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let resp = self.client.ask(query, Some(top_k)).await?;
        Ok(resp.results)
    }

    async fn add_entry(&self, entry: NewEntry) -> Result<QaEntry> {
        let entry = entry.validate()?;
        let resp = self.client.add(&entry).await?;
        let id = resp
            .id
            .ok_or_else(|| anyhow::anyhow!("Server did not return an id: {}", resp.message))?;
        Ok(entry.into_entry(id))
    }

    async fn stats(&self) -> Result<KbStats> {
        self.client.stats().await
    }

    async fn entries(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<QaEntry>> {
        let query = EntriesQuery {
            language: language.map(str::to_string),
            category: category.map(str::to_string),
        };
        self.client.entries(&query).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Unified knowledge base - can be local or remote
pub enum KnowledgeBase {
    Local(LocalKb),
    Remote(RemoteKb),
}

impl KnowledgeBase {
    /// Create from CLI args and config
    ///
    /// Priority:
    /// 1. --server flag → Remote
    /// 2. --remote flag → Remote at `remote.url`
    /// 3. Local data file (`--data`, env, config, `.lareqa/`), or sample data
    pub fn from_args(
        server_url: Option<&str>,
        use_remote: bool,
        data_file: Option<PathBuf>,
        config: &crate::config::Config,
    ) -> Result<Self> {
        if let Some(url) = server_url {
            return Ok(KnowledgeBase::Remote(RemoteKb::new(
                url,
                config.remote.timeout_secs,
            )?));
        }

        if use_remote {
            return Ok(KnowledgeBase::Remote(RemoteKb::from_config(&config.remote)?));
        }

        let path = data_file.or_else(|| config.data_file());
        Ok(KnowledgeBase::Local(LocalKb::open_optional(path)?))
    }
}

#[async_trait]
impl KnowledgeBaseBackend for KnowledgeBase {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        match self {
            KnowledgeBase::Local(kb) => kb.search(query, top_k).await,
            KnowledgeBase::Remote(kb) => kb.search(query, top_k).await,
        }
    }

    async fn add_entry(&self, entry: NewEntry) -> Result<QaEntry> {
        match self {
            KnowledgeBase::Local(kb) => kb.add_entry(entry).await,
            KnowledgeBase::Remote(kb) => kb.add_entry(entry).await,
        }
    }

    async fn stats(&self) -> Result<KbStats> {
        match self {
            KnowledgeBase::Local(kb) => kb.stats().await,
            KnowledgeBase::Remote(kb) => kb.stats().await,
        }
    }

    async fn entries(
        &self,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<QaEntry>> {
        match self {
            KnowledgeBase::Local(kb) => kb.entries(language, category).await,
            KnowledgeBase::Remote(kb) => kb.entries(language, category).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            KnowledgeBase::Local(kb) => kb.name(),
            KnowledgeBase::Remote(kb) => kb.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_search() -> Result<()> {
        let kb = LocalKb::in_memory();
        let results = kb.search("What is artificial intelligence?", 3).await?;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].entry.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_local_add_persists() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("kb.json");

        let kb = LocalKb::open(path.clone())?;
        let added = kb
            .add_entry(NewEntry::new("en", "What is blockchain technology?", "A distributed ledger."))
            .await?;
        assert_eq!(added.id, 11);
        assert!(path.exists());

        let reopened = LocalKb::open(path)?;
        assert_eq!(reopened.stats().await?.total_entries, 11);
        Ok(())
    }

    #[tokio::test]
    async fn test_in_memory_add_does_not_touch_disk() -> Result<()> {
        let kb = LocalKb::in_memory();
        kb.add_entry(NewEntry::new("pt", "O que é IA?", "Inteligência Artificial."))
            .await?;
        assert!(kb.path().is_none());
        assert_eq!(kb.stats().await?.languages.get("pt"), Some(&1));
        Ok(())
    }

    #[tokio::test]
    async fn test_local_entries_filter() -> Result<()> {
        let kb = LocalKb::in_memory();
        let en = kb.entries(Some("en"), None).await?;
        assert_eq!(en.len(), 3);
        Ok(())
    }

    #[test]
    fn test_from_args_prefers_server_flag() -> Result<()> {
        let config = crate::config::Config::default();
        let kb = KnowledgeBase::from_args(Some("http://localhost:5000"), false, None, &config)?;
        assert!(matches!(kb, KnowledgeBase::Remote(_)));
        assert_eq!(kb.name(), "http://localhost:5000");
        Ok(())
    }

    #[test]
    fn test_from_args_remote_requires_url() {
        let config = crate::config::Config::default();
        assert!(KnowledgeBase::from_args(None, true, None, &config).is_err());
    }

    #[test]
    fn test_from_args_explicit_data_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("kb.json");
        let config = crate::config::Config::default();
        let kb = KnowledgeBase::from_args(None, false, Some(path.clone()), &config)?;
        match kb {
            KnowledgeBase::Local(local) => assert_eq!(local.path(), Some(path.as_path())),
            KnowledgeBase::Remote(_) => panic!("expected local"),
        }
        Ok(())
    }
}
