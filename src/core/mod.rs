//! Core module - Business logic
//!
//! Knowledge-base records, the similarity scorer, ranking and storage.

pub mod entry;
pub mod error;
pub mod kb;
pub mod search;
pub mod seed;
pub mod similarity;
pub mod store;
