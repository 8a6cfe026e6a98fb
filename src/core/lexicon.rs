//! Emotion lexicon: keywords, patterns and weights per category
//!
//! The built-in table is compiled once per process and never mutated.
//! Definition order is significant: it breaks ties between equal scores.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::types::Emotion;
use crate::{LexiconError, PATTERN_MULTIPLIER};

/// A keyword as written plus its lowercase matching form
#[derive(Debug, Clone)]
pub struct Keyword {
    pub text: String,
    pub needle: String,
}

/// A compiled, case-insensitive phrase pattern
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub source: String,
    pub regex: Regex,
    /// Applied on top of the category weight
    pub multiplier: f64,
}

impl PatternRule {
    /// Marker appended to the match list for each hit
    pub fn marker(&self) -> String {
        format!("pattern: {}", self.source)
    }
}

/// One compiled category
#[derive(Debug, Clone)]
pub struct EmotionCategory {
    pub emotion: Emotion,
    pub keywords: Vec<Keyword>,
    pub patterns: Vec<PatternRule>,
    pub weight: f64,
}

/// Uncompiled table row
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub emotion: Emotion,
    pub keywords: Vec<String>,
    pub patterns: Vec<String>,
    pub weight: f64,
}

impl LexiconEntry {
    pub fn new(emotion: Emotion, keywords: &[&str], patterns: &[&str], weight: f64) -> Self {
        Self {
            emotion,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            weight,
        }
    }
}

/// Immutable emotion lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<EmotionCategory>,
}

impl Lexicon {
    /// Compile and validate a table
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        let mut categories: Vec<EmotionCategory> = Vec::with_capacity(entries.len());

        for entry in entries {
            if categories.iter().any(|c| c.emotion == entry.emotion) {
                return Err(LexiconError::DuplicateEmotion(entry.emotion));
            }
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(LexiconError::InvalidWeight {
                    emotion: entry.emotion,
                    weight: entry.weight,
                });
            }

            let keywords = entry
                .keywords
                .into_iter()
                .map(|text| {
                    if text.trim().is_empty() {
                        return Err(LexiconError::EmptyKeyword(entry.emotion));
                    }
                    let needle = text.to_lowercase();
                    Ok(Keyword { text, needle })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let patterns = entry
                .patterns
                .into_iter()
                .map(|source| compile_pattern(entry.emotion, source))
                .collect::<Result<Vec<_>, _>>()?;

            categories.push(EmotionCategory {
                emotion: entry.emotion,
                keywords,
                patterns,
                weight: entry.weight,
            });
        }

        Ok(Self { categories })
    }

    /// Process-wide built-in lexicon, shared
    pub fn builtin() -> Result<Arc<Lexicon>, LexiconError> {
        BUILTIN.as_ref().map(Arc::clone).map_err(Clone::clone)
    }

    /// Categories in definition order
    pub fn categories(&self) -> &[EmotionCategory] {
        &self.categories
    }

    pub fn get(&self, emotion: Emotion) -> Option<&EmotionCategory> {
        self.categories.iter().find(|c| c.emotion == emotion)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_keywords(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

fn compile_pattern(emotion: Emotion, source: String) -> Result<PatternRule, LexiconError> {
    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| LexiconError::InvalidPattern {
            emotion,
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
    Ok(PatternRule {
        source,
        regex,
        multiplier: PATTERN_MULTIPLIER,
    })
}

lazy_static! {
    static ref BUILTIN: Result<Arc<Lexicon>, LexiconError> =
        Lexicon::from_entries(builtin_entries()).map(Arc::new);
}

/// The built-in Indonesian/English table
pub fn builtin_entries() -> Vec<LexiconEntry> {
    vec![
        LexiconEntry::new(
            Emotion::Anger,
            &[
                "marah", "kesal", "geram", "murka", "berang", "jengkel", "dongkol",
                "angry", "mad", "furious", "rage", "irritated", "annoyed", "pissed",
                "damn", "hell", "stupid", "idiot", "hate", "disgusting", "terrible",
                "awful", "worst", "sucks", "ridiculous", "outrageous", "unacceptable",
                "muak", "tertekan",
            ],
            &[
                r"\b(tidak|nggak|gak)\s+(bisa|mau|suka|setuju)\b",
                r"\b(kenapa|mengapa)\s+(harus|musti)\b",
                r"\bapa-apaan\b",
                r"\bmenyebalkan\b",
                r"\bmuak\s+(saya|aku)\b",
                r"\bberhenti\s+menekan\b",
                r"\bcukup\s+tertekan\b",
            ],
            1.0,
        ),
        LexiconEntry::new(
            Emotion::Sadness,
            &[
                "sedih", "kecewa", "galau", "patah hati", "hancur", "terpuruk",
                "sad", "disappointed", "heartbroken", "depressed", "down", "blue",
                "cry", "tears", "sorry", "regret", "miss", "lonely", "empty",
                "hopeless", "devastated", "grief", "sorrow", "melancholy",
            ],
            &[
                r"\bsaya\s+(sedih|kecewa|galau)\b",
                r"\btidak\s+(bahagia|senang|gembira)\b",
                r"\bkenapa\s+(hidup|nasib)\b",
            ],
            0.9,
        ),
        LexiconEntry::new(
            Emotion::Anxiety,
            &[
                "cemas", "khawatir", "takut", "was-was", "gelisah", "panik", "stress",
                "anxious", "worried", "nervous", "scared", "afraid", "panic", "stress",
                "concerned", "uneasy", "restless", "tense", "overwhelmed", "pressure",
                "doubt", "uncertain", "insecure", "paranoid", "frightened",
            ],
            &[
                r"\bbagaimana\s+(kalau|jika|bila)\b",
                r"\bapa\s+(yang\s+)?terjadi\b",
                r"\bsemoga\s+(tidak|jangan)\b",
            ],
            0.8,
        ),
        LexiconEntry::new(
            Emotion::Aggression,
            &[
                "serang", "hancurkan", "bunuh", "pukul", "hajar", "gebuk", "tonjok",
                "attack", "destroy", "kill", "fight", "punch", "hit", "beat", "smash",
                "crush", "eliminate", "violence", "aggressive", "hostile", "brutal",
                "savage", "fierce", "ruthless", "merciless", "vicious",
            ],
            &[
                r"\bakan\s+(ku|saya)\s+(hancurkan|bunuh|serang)\b",
                r"\bkamu\s+(akan|bakal)\s+(mati|hancur)\b",
            ],
            1.2,
        ),
        LexiconEntry::new(
            Emotion::Defensiveness,
            &[
                "bukan salah saya", "saya tidak", "itu bukan", "jangan salahkan",
                "not my fault", "not me", "I didn't", "wasn't me", "defend", "protect",
                "excuse", "justify", "explanation", "misunderstand", "unfair",
                "blame", "accusation", "innocent", "victim",
            ],
            &[
                r"\bbukan\s+(salah|kesalahan)\s+(saya|aku)\b",
                r"\bsaya\s+(tidak|nggak|gak)\s+(tahu|tau|pernah)\b",
                r"\bkenapa\s+(saya|aku)\s+(yang|harus)\b",
            ],
            0.7,
        ),
        LexiconEntry::new(
            Emotion::Regret,
            &[
                "menyesal", "sesal", "salah", "maaf", "mohon maaf", "sorry",
                "regret", "apologize", "mistake", "wrong", "fault", "guilt",
                "shame", "remorse", "repent", "forgive", "pardon",
            ],
            &[
                r"\bmaaf\s+(ya|deh|banget)\b",
                r"\bsaya\s+(salah|keliru)\b",
                r"\bseharusnya\s+(tidak|jangan)\b",
            ],
            0.6,
        ),
        LexiconEntry::new(
            Emotion::Irritation,
            &[
                "kesal", "sebel", "bete", "ilfeel", "annoyed", "irritated", "bothered",
                "frustrated", "fed up", "sick of", "tired of", "enough", "stop it",
            ],
            &[
                r"\budah\s+(capek|lelah|bosan)\b",
                r"\bstop\s+(it|doing|that)\b",
            ],
            0.8,
        ),
        LexiconEntry::new(
            Emotion::Happiness,
            &[
                "senang", "bahagia", "gembira", "suka", "cinta", "love", "happy",
                "joy", "excited", "cheerful", "delighted", "pleased", "glad",
                "wonderful", "amazing", "fantastic", "great", "excellent", "awesome",
                "perfect", "brilliant", "marvelous", "superb", "outstanding",
                "incredible", "fabulous", "terrific", "magnificent",
            ],
            &[
                r"\bsaya\s+(senang|bahagia|suka)\b",
                r"\bterima\s+kasih\s+(banyak|banget)\b",
                r"\bsangat\s+(bagus|baik|keren)\b",
            ],
            0.9,
        ),
        LexiconEntry::new(
            Emotion::Neutral,
            &[
                "baik", "oke", "ya", "terima kasih", "thanks", "okay", "fine",
                "good", "nice", "cool", "sure", "alright", "understand",
            ],
            &[],
            0.3,
        ),
    ]
}
