// Keyword scoring engine.
// Tokenizer, keyword overlap, resume heuristics and recommendation assembly.
// Everything below `handlers` is pure and synchronous.

pub mod engine;
pub mod handlers;
pub mod heuristics;
pub mod keywords;
pub mod recommendations;
pub mod tokenizer;
pub mod vocabulary;

use thiserror::Error;

pub use engine::AtsEngine;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Resume text and job description are required ({field} is empty)")]
    MissingInput { field: &'static str },
}
