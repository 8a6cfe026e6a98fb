//! Lexicon introspection and self-test reports

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::Emotion;

/// Per-emotion summary of the lexicon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionDetails {
    pub keyword_count: usize,
    pub pattern_count: usize,
    pub weight: f64,
    /// First keywords of the category
    pub sample_keywords: Vec<String>,
}

/// Listing of every supported emotion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionCatalog {
    /// Ids in lexicon order
    pub supported_emotions: Vec<Emotion>,
    pub emotion_details: BTreeMap<Emotion, EmotionDetails>,
    pub total_keywords: usize,
    pub method: String,
}

/// One sentence of the smoke test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfTestEntry {
    pub text: String,
    pub emotion: Emotion,
    pub confidence: f64,
    pub emoticon: String,
}

/// Smoke test over the fixed example sentences
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub test_results: Vec<SelfTestEntry>,
    pub total_emotions: usize,
    pub method: String,
    pub generated_at: DateTime<Utc>,
}
