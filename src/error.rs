//! Error types for lexicon construction and analysis

use thiserror::Error;

use crate::types::Emotion;

/// Errors raised while compiling a lexicon table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexiconError {
    #[error("emotion '{0}' is defined more than once")]
    DuplicateEmotion(Emotion),

    #[error("emotion '{emotion}' has invalid weight {weight}")]
    InvalidWeight { emotion: Emotion, weight: f64 },

    #[error("emotion '{0}' contains an empty keyword")]
    EmptyKeyword(Emotion),

    #[error("emotion '{emotion}' has invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        emotion: Emotion,
        pattern: String,
        reason: String,
    },
}

/// Errors raised inside the analysis pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("lexicon unavailable: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("score for '{emotion}' is not finite")]
    NonFiniteScore { emotion: Emotion },

    #[error("analysis panicked: {0}")]
    Panicked(String),
}
