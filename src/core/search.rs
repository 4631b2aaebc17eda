//! Search - Top-K answer ranking
//!
//! Scores every entry against the query (best of question and answer
//! text) and keeps the highest scores.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::entry::QaEntry;
use super::similarity::Similarity;

/// An entry with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub entry: QaEntry,
    pub similarity_score: f64,
}

/// Rank all entries for `query` and keep the best `top_k`.
///
/// Sort is stable, so equal scores keep knowledge-base order.
pub fn rank(
    entries: &[QaEntry],
    query: &str,
    top_k: usize,
    scorer: &dyn Similarity,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = entries
        .iter()
        .map(|entry| {
            let q = scorer.score(query, &entry.question);
            let a = scorer.score(query, &entry.answer);
            SearchResult {
                entry: entry.clone(),
                similarity_score: q.max(a),
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(top_k);
    results
}

/// Drop results with a zero score
pub fn relevant(results: Vec<SearchResult>) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| r.similarity_score > 0.0)
        .collect()
}

/// False when there is nothing to show: no results, or the best one scored 0
pub fn has_relevant_answer(results: &[SearchResult]) -> bool {
    results
        .first()
        .map(|r| r.similarity_score > 0.0)
        .unwrap_or(false)
}
