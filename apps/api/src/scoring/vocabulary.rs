//! Fixed word lists the engine scores against.
//!
//! Built-in defaults cover English resumes. A JSON file can override any subset
//! of the lists; keys it omits keep their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "a", "an", "who", "whom", "what", "which",
    "that", "this", "these", "those", "from", "you", "your", "our", "their", "its", "they",
    "them",
];

const STRONG_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "reduced",
    "optimized",
];

const WEAK_PHRASES: &[&str] = &["responsible for", "worked on", "helped with", "assisted"];

const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub stopwords: Vec<String>,
    pub strong_verbs: Vec<String>,
    pub weak_phrases: Vec<String>,
    pub required_sections: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            stopwords: owned(STOPWORDS),
            strong_verbs: owned(STRONG_VERBS),
            weak_phrases: owned(WEAK_PHRASES),
            required_sections: owned(REQUIRED_SECTIONS),
        }
    }
}

impl Vocabulary {
    /// Reads a vocabulary override file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        let vocabulary: Vocabulary = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid vocabulary file '{}'", path.display()))?;
        Ok(vocabulary.normalized())
    }

    /// Lower-cases and trims every entry, dropping blanks. Matching is
    /// case-insensitive, so entries must be stored lower-case.
    pub fn normalized(self) -> Self {
        Self {
            stopwords: normalize_list(self.stopwords),
            strong_verbs: normalize_list(self.strong_verbs),
            weak_phrases: normalize_list(self.weak_phrases),
            required_sections: normalize_list(self.required_sections),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize_list(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
