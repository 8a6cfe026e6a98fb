//! Core types for Emolex

mod emotion;
mod score;
mod result;
mod catalog;

pub use emotion::Emotion;
pub use score::{EmotionScore, EmotionScores, ScoreBreakdown};
pub use result::AnalysisResult;
pub use catalog::{EmotionCatalog, EmotionDetails, SelfTestEntry, SelfTestReport};
