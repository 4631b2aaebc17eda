//! Similarity - Lexical text scorer
//!
//! Bag-of-words Jaccard overlap. Stands in for a multilingual embedding
//! model; anything implementing [`Similarity`] can replace it.

use std::collections::HashSet;

/// Scores how related two texts are, in `[0, 1]`
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Jaccard similarity over lowercase whitespace tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSimilarity;

impl Similarity for LexicalSimilarity {
    fn score(&self, a: &str, b: &str) -> f64 {
        jaccard(&tokenize(a), &tokenize(b))
    }
}

/// Lowercase, split on whitespace, dedupe.
///
/// Punctuation stays attached: `intelligence?` and `intelligence` differ.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// `|A ∩ B| / |A ∪ B|`, or 0 when both sets are empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let s = LexicalSimilarity.score("What is AI?", "what is ai?");
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(LexicalSimilarity.score("neural network", "datos ciencia"), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(LexicalSimilarity.score("", ""), 0.0);
        assert_eq!(LexicalSimilarity.score("   ", "word"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {machine, learning, benefits} vs {machine, learning}
        let s = LexicalSimilarity.score("machine learning benefits", "Machine Learning");
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = "aprendizaje automático";
        let b = "¿Qué es el aprendizaje automático?";
        assert_eq!(LexicalSimilarity.score(a, b), LexicalSimilarity.score(b, a));
    }

    #[test]
    fn test_punctuation_is_kept() {
        let tokens = tokenize("Intelligence? intelligence");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("intelligence?"));
    }

    #[test]
    fn test_repeated_words_dedupe() {
        assert_eq!(tokenize("data data DATA").len(), 1);
    }

    #[test]
    fn test_unicode_lowercase() {
        let s = LexicalSimilarity.score("DONNÉES", "données");
        assert_eq!(s, 1.0);
    }
}
