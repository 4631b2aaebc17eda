//! Store - In-memory knowledge base with JSON persistence
//!
//! # Key Points
//! - Entries live in a `Vec`, in insertion order (ranking ties rely on it)
//! - Ids are `max + 1`, never reused while the entry exists
//! - Persistence is a whole-file overwrite on `save`, a whole-list replace on `load`

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::entry::{NewEntry, QaEntry};
use super::error::{QaError, Result};
use super::search::{self, SearchResult};
use super::seed::sample_entries;
use super::similarity::{LexicalSimilarity, Similarity};

/// Knowledge base statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KbStats {
    pub total_entries: usize,
    pub languages: BTreeMap<String, usize>,
    pub categories: BTreeMap<String, usize>,
}

/// The knowledge base
pub struct KnowledgeStore {
    entries: Vec<QaEntry>,
    scorer: Box<dyn Similarity>,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KnowledgeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl KnowledgeStore {
    /// Empty store with the lexical scorer
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Store pre-filled with the built-in multilingual samples
    pub fn with_sample_data() -> Self {
        Self::from_entries(sample_entries())
    }

    pub fn from_entries(entries: Vec<QaEntry>) -> Self {
        Self {
            entries,
            scorer: Box::new(LexicalSimilarity),
        }
    }

    /// Swap the similarity scorer
    pub fn with_scorer(mut self, scorer: impl Similarity + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Read a JSON file into a new store
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Open `path` when it exists, otherwise fall back to the samples
    pub fn open_or_seed(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::open(path)
        } else {
            debug!(path = %path.display(), "data file missing, using sample data");
            Ok(Self::with_sample_data())
        }
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&QaEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries matching the optional exact language and category
    pub fn filter(&self, language: Option<&str>, category: Option<&str>) -> Vec<QaEntry> {
        self.entries
            .iter()
            .filter(|e| language.map_or(true, |l| e.language == l))
            .filter(|e| category.map_or(true, |c| e.category == c))
            .cloned()
            .collect()
    }

    /// Top `top_k` entries for `query`, best first
    pub fn search_answers(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        search::rank(&self.entries, query, top_k, self.scorer.as_ref())
    }

    /// Validate and append an entry, returning it with its new id
    pub fn add(&mut self, new: NewEntry) -> Result<QaEntry> {
        let new = new.validate()?;
        let id = self.next_id();
        let entry = new.into_entry(id);

        self.entries.push(entry.clone());
        info!(id, language = %entry.language, "added Q&A pair");

        Ok(entry)
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    pub fn statistics(&self) -> KbStats {
        let mut stats = KbStats {
            total_entries: self.entries.len(),
            ..Default::default()
        };

        for entry in &self.entries {
            *stats.languages.entry(entry.language.clone()).or_default() += 1;
            *stats.categories.entry(entry.category.clone()).or_default() += 1;
        }

        stats
    }

    /// Write all entries as pretty JSON, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        info!(path = %path.display(), entries = self.entries.len(), "knowledge base saved");

        Ok(())
    }

    /// Replace all entries with the contents of `path`.
    ///
    /// The store is left untouched on any error.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Err(QaError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let entries: Vec<QaEntry> = serde_json::from_str(&content)?;
        let count = entries.len();

        self.entries = entries;
        info!(path = %path.display(), entries = count, "knowledge base loaded");

        Ok(count)
    }
}
