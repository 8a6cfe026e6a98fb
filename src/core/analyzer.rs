//! Analyzer: request-level orchestration over the scoring pipeline
//!
//! analyze() never fails. Internal errors (and panics) come back as a
//! neutral result with confidence 0.0 and an error message.

use chrono::Utc;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::lexicon::Lexicon;
use crate::core::normalizer::normalize;
use crate::core::scorer::{EmotionScorer, MatchMode};
use crate::core::selector::select_dominant;
use crate::types::{
    AnalysisResult, EmotionCatalog, EmotionDetails, SelfTestEntry, SelfTestReport,
};
use crate::{AnalysisError, LexiconError, MAX_MATCHES, METHOD, SAMPLE_KEYWORDS};

/// Smoke-test sentences
pub const SELF_TEST_TEXTS: [&str; 7] = [
    "Saya sangat marah dengan pelayanan ini!",
    "Terima kasih atas bantuannya, sangat membantu",
    "Saya khawatir kalau nanti terjadi masalah",
    "Maaf ya, saya salah tadi",
    "Udah capek banget sama hal ini",
    "Akan ku hancurkan semua yang menghalangi",
    "Bukan salah saya kalau ini terjadi",
];

/// Analyzer tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    pub match_mode: MatchMode,
    /// Matches kept on the result
    pub max_matches: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            max_matches: MAX_MATCHES,
        }
    }
}

/// Emotion analyzer bound to an immutable, shared lexicon
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>, config: AnalyzerConfig) -> Self {
        Self { lexicon, config }
    }

    /// Analyzer over the built-in lexicon with default config
    pub fn builtin() -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::builtin()?, AnalyzerConfig::default()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> AnalyzerConfig {
        self.config
    }

    fn scorer(&self) -> EmotionScorer<'_> {
        EmotionScorer::new(&self.lexicon).with_mode(self.config.match_mode)
    }

    /// Analyze text. Always returns a well-formed result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_analyze(text)))
            .unwrap_or_else(|payload| Err(AnalysisError::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, text_length = text.chars().count(), "emotion analysis failed");
                AnalysisResult::failure(&err)
            }
        }
    }

    /// Analyze text, surfacing internal errors
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            debug!("empty text, returning neutral default");
            return Ok(AnalysisResult::neutral_default().with_metadata(text, String::new()));
        }

        let processed = normalize(text);
        let scores = self.scorer().try_score(&processed)?;
        let result = select_dominant(&scores, self.config.max_matches);

        debug!(
            emotion = %result.emotion,
            confidence = result.confidence,
            scored = scores.len(),
            text_length = text.chars().count(),
            "emotion analyzed"
        );

        Ok(result.with_metadata(text, processed))
    }

    /// Describe every category of the lexicon
    pub fn list_supported_emotions(&self) -> EmotionCatalog {
        let categories = self.lexicon.categories();
        EmotionCatalog {
            supported_emotions: categories.iter().map(|c| c.emotion).collect(),
            emotion_details: categories
                .iter()
                .map(|c| {
                    let details = EmotionDetails {
                        keyword_count: c.keywords.len(),
                        pattern_count: c.patterns.len(),
                        weight: c.weight,
                        sample_keywords: c
                            .keywords
                            .iter()
                            .take(SAMPLE_KEYWORDS)
                            .map(|k| k.text.clone())
                            .collect(),
                    };
                    (c.emotion, details)
                })
                .collect(),
            total_keywords: self.lexicon.total_keywords(),
            method: METHOD.to_string(),
        }
    }

    /// Run the fixed example sentences through analyze()
    pub fn self_test(&self) -> SelfTestReport {
        let test_results = SELF_TEST_TEXTS
            .iter()
            .map(|text| {
                let result = self.analyze(text);
                SelfTestEntry {
                    text: text.to_string(),
                    emotion: result.emotion,
                    confidence: result.confidence,
                    emoticon: result.emoticon,
                }
            })
            .collect();

        SelfTestReport {
            test_results,
            total_emotions: self.lexicon.len(),
            method: METHOD.to_string(),
            generated_at: Utc::now(),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
