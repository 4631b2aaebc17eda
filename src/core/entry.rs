//! Entry - Core data structure
//!
//! A Q&A entry is the fundamental unit of knowledge in lareqa.
//!
//! # Key Properties
//! - **id**: numeric, unique within a store, assigned on insert
//! - **language**: language code of the question/answer text (e.g. `en`, `zh`)
//! - **category**: free-form grouping, `General` when not given

use serde::{Deserialize, Serialize};

use super::error::{QaError, Result};

/// Languages accepted by the web interface out of the box
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es", "fr", "de", "hi", "zh", "ar", "ja"];

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "General";

/// A question/answer pair in some language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaEntry {
    pub id: u64,

    /// Language code (e.g., en, es, fr)
    pub language: String,

    pub question: String,

    pub answer: String,

    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Payload for adding an entry; the store assigns the id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewEntry {
    pub fn new(
        language: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            question: question.into(),
            answer: answer.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Trim all fields and fill in the default category.
    ///
    /// # Errors
    /// Returns `MissingField` if language, question or answer is blank.
    pub fn validate(self) -> Result<NewEntry> {
        let language = self.language.trim().to_string();
        let question = self.question.trim().to_string();
        let answer = self.answer.trim().to_string();

        if language.is_empty() {
            return Err(QaError::MissingField("language"));
        }
        if question.is_empty() {
            return Err(QaError::MissingField("question"));
        }
        if answer.is_empty() {
            return Err(QaError::MissingField("answer"));
        }

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_category);

        Ok(NewEntry {
            language,
            question,
            answer,
            category: Some(category),
        })
    }

    /// Like [`validate`](Self::validate), but also rejects languages outside `supported`
    pub fn validate_for(self, supported: &[String]) -> Result<NewEntry> {
        let entry = self.validate()?;
        if !is_supported_language(&entry.language, supported) {
            return Err(QaError::UnsupportedLanguage {
                language: entry.language,
                supported: supported.to_vec(),
            });
        }
        Ok(entry)
    }

    pub(crate) fn into_entry(self, id: u64) -> QaEntry {
        QaEntry {
            id,
            language: self.language,
            question: self.question,
            answer: self.answer,
            category: self.category.unwrap_or_else(default_category),
        }
    }
}

/// Exact match against a list of language codes
pub fn is_supported_language(code: &str, supported: &[String]) -> bool {
    supported.iter().any(|s| s == code)
}

/// Default supported list as owned strings
pub fn default_supported_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fills_default_category() {
        let entry = NewEntry::new(" en ", "What is Rust?", "A language.")
            .validate()
            .unwrap();
        assert_eq!(entry.language, "en");
        assert_eq!(entry.category.as_deref(), Some("General"));
    }

    #[test]
    fn test_validate_blank_category_is_general() {
        let entry = NewEntry::new("en", "Q", "A")
            .with_category("   ")
            .validate()
            .unwrap();
        assert_eq!(entry.category.as_deref(), Some("General"));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let err = NewEntry::new("en", "  ", "A").validate().unwrap_err();
        assert!(matches!(err, QaError::MissingField("question")));

        let err = NewEntry::new("", "Q", "A").validate().unwrap_err();
        assert!(matches!(err, QaError::MissingField("language")));
    }

    #[test]
    fn test_validate_for_unsupported_language() {
        let supported = default_supported_languages();
        let err = NewEntry::new("pt", "Q", "A")
            .validate_for(&supported)
            .unwrap_err();
        assert!(err.to_string().contains("en, es, fr, de, hi, zh, ar, ja"));
    }

    #[test]
    fn test_missing_category_deserializes_as_general() {
        let json = r#"{"id": 3, "language": "fr", "question": "Q", "answer": "A"}"#;
        let entry: QaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, "General");
    }
}
