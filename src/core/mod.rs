//! Core modules for Emolex

pub mod normalizer;
pub mod lexicon;
pub mod scorer;
pub mod selector;
pub mod analyzer;
pub mod api;

pub use normalizer::normalize;
pub use lexicon::{builtin_entries, EmotionCategory, Keyword, Lexicon, LexiconEntry, PatternRule};
pub use scorer::{EmotionScorer, MatchMode};
pub use selector::select_dominant;
pub use analyzer::{Analyzer, AnalyzerConfig, SELF_TEST_TEXTS};
pub use api::{create_router, run_server};
