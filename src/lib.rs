//! lareqa - Cross-lingual question answering
//!
//! Ask a question in any language and get ranked answers from a small
//! multilingual knowledge base.
//!
//! # Architecture
//!
//! ```text
//! KnowledgeStore ──► Similarity (Jaccard) ──► top-K rank ──► cli / web
//! ```
//!
//! ## Key Concepts
//!
//! - **Entry**: a question/answer pair tagged with a language code and category
//! - **Similarity**: lexical word overlap, a stand-in for a multilingual embedding model
//! - **Persistence**: the whole knowledge base is one JSON file, overwritten on save

pub mod cli;
pub mod config;
pub mod core;
pub mod remote;
pub mod web;

pub use self::core::entry::{NewEntry, QaEntry};
pub use self::core::error::QaError;
pub use self::core::kb::{KnowledgeBase, KnowledgeBaseBackend, LocalKb, RemoteKb};
pub use self::core::search::SearchResult;
pub use self::core::store::{KbStats, KnowledgeStore};
pub use remote::RemoteClient;
