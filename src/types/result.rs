//! Analysis result returned to callers

use colored::Colorize;
use serde::Serialize;

use crate::types::{Emotion, ScoreBreakdown};
use crate::{AnalysisError, ERROR_CONFIDENCE, METHOD, NEUTRAL_CONFIDENCE};

/// Outcome of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Dominant emotion
    pub emotion: Emotion,
    /// 0.0-1.0
    pub confidence: f64,
    pub emoticon: String,
    /// First matches of the dominant emotion
    pub matches: Vec<String>,
    /// Raw score of every emotion that matched; absent on fallback paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_scores: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Character count of the raw input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Result for a text that matched nothing
    pub fn neutral_default() -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
            emoticon: Emotion::Neutral.emoticon().to_string(),
            matches: Vec::new(),
            all_scores: None,
            method: None,
            text_length: None,
            processed_text: None,
            error: None,
        }
    }

    /// Neutral result carrying an error message
    pub fn failure(err: &AnalysisError) -> Self {
        Self {
            confidence: ERROR_CONFIDENCE,
            method: Some(METHOD.to_string()),
            error: Some(format!("Analysis failed: {}", err)),
            ..Self::neutral_default()
        }
    }

    /// Attach request metadata
    pub fn with_metadata(mut self, raw_text: &str, processed_text: String) -> Self {
        self.method = Some(METHOD.to_string());
        self.text_length = Some(raw_text.chars().count());
        self.processed_text = Some(processed_text);
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} {} ({}) | confidence={:.2} | matches={}",
            self.emoticon,
            self.emotion,
            self.emotion.label(),
            self.confidence,
            self.matches.len()
        );
        match self.emotion {
            Emotion::Anger | Emotion::Aggression | Emotion::Irritation => line.red().to_string(),
            Emotion::Sadness | Emotion::Regret => line.blue().to_string(),
            Emotion::Anxiety | Emotion::Defensiveness => line.yellow().to_string(),
            Emotion::Happiness => line.green().to_string(),
            Emotion::Neutral => line.dimmed().to_string(),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "emotion={} | confidence={:.3} | matches={}",
            self.emotion,
            self.confidence,
            self.matches.join(",")
        )
    }
}
