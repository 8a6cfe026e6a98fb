//! Per-request score structures

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::Emotion;
use crate::CONFIDENCE_SCALE;

/// Score of one emotion for one text
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    /// Raw weighted sum, never clamped
    pub score: f64,
    /// Matched keywords and pattern markers, in discovery order
    pub matches: Vec<String>,
    /// min(score / 3.0, 1.0)
    pub confidence: f64,
}

impl EmotionScore {
    pub fn new(score: f64, matches: Vec<String>) -> Self {
        Self {
            score,
            matches,
            confidence: (score / CONFIDENCE_SCALE).clamp(0.0, 1.0),
        }
    }
}

/// Scored emotions in lexicon order; only emotions with score > 0 are present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionScores {
    entries: Vec<(Emotion, EmotionScore)>,
}

impl EmotionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score, keeping insertion order. Zero scores are dropped.
    pub fn insert(&mut self, emotion: Emotion, score: EmotionScore) {
        if score.score <= 0.0 {
            return;
        }
        match self.entries.iter_mut().find(|(e, _)| *e == emotion) {
            Some(slot) => slot.1 = score,
            None => self.entries.push((emotion, score)),
        }
    }

    pub fn get(&self, emotion: Emotion) -> Option<&EmotionScore> {
        self.entries.iter().find(|(e, _)| *e == emotion).map(|(_, s)| s)
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.get(emotion).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Emotion, EmotionScore)> {
        self.entries.iter()
    }

    /// Raw score per emotion, same order
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown(self.entries.iter().map(|(e, s)| (*e, s.score)).collect())
    }
}

/// Ordered emotion → raw score map, serialized as a JSON object in lexicon order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown(pub Vec<(Emotion, f64)>);

impl ScoreBreakdown {
    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        self.0.iter().find(|(e, _)| *e == emotion).map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ScoreBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (emotion, score) in &self.0 {
            map.serialize_entry(emotion.id(), score)?;
        }
        map.end()
    }
}
