//! Emotion category definitions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The nine fixed emotion categories, in lexicon order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "marah")]
    Anger,
    #[serde(rename = "sedih")]
    Sadness,
    #[serde(rename = "cemas")]
    Anxiety,
    #[serde(rename = "agresif")]
    Aggression,
    #[serde(rename = "defensif")]
    Defensiveness,
    #[serde(rename = "penyesalan")]
    Regret,
    #[serde(rename = "kesal")]
    Irritation,
    #[serde(rename = "senang")]
    Happiness,
    #[serde(rename = "netral")]
    Neutral,
}

impl Emotion {
    /// All categories in definition order
    pub const ALL: [Emotion; 9] = [
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Anxiety,
        Emotion::Aggression,
        Emotion::Defensiveness,
        Emotion::Regret,
        Emotion::Irritation,
        Emotion::Happiness,
        Emotion::Neutral,
    ];

    /// Stable wire id
    pub fn id(&self) -> &'static str {
        match self {
            Emotion::Anger => "marah",
            Emotion::Sadness => "sedih",
            Emotion::Anxiety => "cemas",
            Emotion::Aggression => "agresif",
            Emotion::Defensiveness => "defensif",
            Emotion::Regret => "penyesalan",
            Emotion::Irritation => "kesal",
            Emotion::Happiness => "senang",
            Emotion::Neutral => "netral",
        }
    }

    /// Display glyph
    pub fn emoticon(&self) -> &'static str {
        match self {
            Emotion::Anger => "😡",
            Emotion::Sadness => "😢",
            Emotion::Anxiety => "😰",
            Emotion::Aggression => "😤",
            Emotion::Defensiveness => "🛡️",
            Emotion::Regret => "😔",
            Emotion::Irritation => "😠",
            Emotion::Happiness => "😊",
            Emotion::Neutral => "😐",
        }
    }

    /// English label for terminal display
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Anxiety => "anxiety",
            Emotion::Aggression => "aggression",
            Emotion::Defensiveness => "defensiveness",
            Emotion::Regret => "regret",
            Emotion::Irritation => "irritation",
            Emotion::Happiness => "happiness",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.id() == wanted || e.label() == wanted)
            .ok_or_else(|| format!("unknown emotion '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Emotion::ALL.iter().map(|e| e.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&Emotion::Regret).unwrap();
        assert_eq!(json, "\"penyesalan\"");
        let back: Emotion = serde_json::from_str("\"netral\"").unwrap();
        assert_eq!(back, Emotion::Neutral);
    }

    #[test]
    fn test_from_str_accepts_id_and_label() {
        assert_eq!("MARAH".parse::<Emotion>().unwrap(), Emotion::Anger);
        assert_eq!("happiness".parse::<Emotion>().unwrap(), Emotion::Happiness);
        assert!("joy".parse::<Emotion>().is_err());
    }
}
