//! Emolex: lexicon-based emotion classifier
//!
//! Pipeline: text → normalizer → scorer (Lexicon) → selector → AnalysisResult

pub mod core;
pub mod error;
pub mod types;

pub use error::{AnalysisError, LexiconError};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Multiplier applied to every built-in pattern match on top of the category weight
pub const PATTERN_MULTIPLIER: f64 = 1.5;

/// Raw score that maps to full confidence: confidence = min(score / 3.0, 1.0)
pub const CONFIDENCE_SCALE: f64 = 3.0;

/// Confidence reported by the neutral fallback
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Confidence reported when analysis failed
pub const ERROR_CONFIDENCE: f64 = 0.0;

/// Matches kept on the result
pub const MAX_MATCHES: usize = 5;

/// Keywords shown per emotion in the catalog
pub const SAMPLE_KEYWORDS: usize = 5;

/// Method tag attached to every result
pub const METHOD: &str = "nlp_lexicon";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
