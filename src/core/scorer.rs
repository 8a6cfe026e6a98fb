//! Emotion scorer: keyword and pattern matching against a Lexicon
//!
//! score(category) = Σ keyword_hits × weight + Σ pattern_hits × weight × multiplier

use crate::core::lexicon::{EmotionCategory, Lexicon};
use crate::core::normalizer::normalize;
use crate::types::{EmotionScore, EmotionScores};
use crate::AnalysisError;

/// How keywords are located in the normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain substring count ("sad" also hits "sadly")
    #[default]
    Substring,
    /// Only occurrences not glued to other word characters
    WordBoundary,
}

/// Scores text against every category of a lexicon
#[derive(Debug, Clone, Copy)]
pub struct EmotionScorer<'a> {
    lexicon: &'a Lexicon,
    mode: MatchMode,
}

impl<'a> EmotionScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Score raw text. Categories without matches are omitted.
    pub fn score(&self, text: &str) -> EmotionScores {
        self.score_normalized(&normalize(text))
    }

    /// Score already-normalized text
    pub fn score_normalized(&self, normalized: &str) -> EmotionScores {
        let mut scores = EmotionScores::new();
        if normalized.is_empty() {
            return scores;
        }

        for category in self.lexicon.categories() {
            let score = self.score_category(category, normalized);
            scores.insert(category.emotion, score);
        }
        scores
    }

    /// Score and reject non-finite results
    pub fn try_score(&self, normalized: &str) -> Result<EmotionScores, AnalysisError> {
        let scores = self.score_normalized(normalized);
        if let Some((emotion, _)) = scores.iter().find(|(_, s)| !s.score.is_finite()) {
            return Err(AnalysisError::NonFiniteScore { emotion: *emotion });
        }
        Ok(scores)
    }

    fn score_category(&self, category: &EmotionCategory, text: &str) -> EmotionScore {
        let mut score = 0.0;
        let mut matches = Vec::new();

        for keyword in &category.keywords {
            let count = self.count_keyword(text, &keyword.needle);
            if count > 0 {
                score += count as f64 * category.weight;
                matches.extend(std::iter::repeat(keyword.text.clone()).take(count));
            }
        }

        for pattern in &category.patterns {
            let count = pattern.regex.find_iter(text).count();
            if count > 0 {
                score += count as f64 * category.weight * pattern.multiplier;
                matches.extend(std::iter::repeat(pattern.marker()).take(count));
            }
        }

        EmotionScore::new(score, matches)
    }

    fn count_keyword(&self, text: &str, needle: &str) -> usize {
        match self.mode {
            MatchMode::Substring => text.matches(needle).count(),
            MatchMode::WordBoundary => text
                .match_indices(needle)
                .filter(|(start, _)| is_word_bounded(text, *start, needle.len()))
                .count(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_bounded(text: &str, start: usize, len: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[start + len..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::LexiconEntry;
    use crate::types::Emotion;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn small_lexicon() -> Lexicon {
        Lexicon::from_entries(vec![
            LexiconEntry::new(Emotion::Sadness, &["sad"], &[r"\bsaya\s+sedih\b"], 1.0),
            LexiconEntry::new(Emotion::Happiness, &["happy"], &[], 0.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_text_scores_nothing() {
        let lexicon = small_lexicon();
        assert!(EmotionScorer::new(&lexicon).score("").is_empty());
        assert!(EmotionScorer::new(&lexicon).score("  ,,, ").is_empty());
    }

    #[test]
    fn test_keyword_repetition_is_linear() {
        let lexicon = small_lexicon();
        let scorer = EmotionScorer::new(&lexicon);
        for n in 1..=4 {
            let text = vec!["happy"; n].join(" ");
            let scores = scorer.score(&text);
            let happy = scores.get(Emotion::Happiness).unwrap();
            assert!(approx(happy.score, n as f64 * 0.5));
            assert_eq!(happy.matches.len(), n);
        }
    }

    #[test]
    fn test_pattern_weighted_by_multiplier() {
        let lexicon = small_lexicon();
        let scores = EmotionScorer::new(&lexicon).score("Saya sedih");
        let sad = scores.get(Emotion::Sadness).unwrap();
        assert!(approx(sad.score, 1.5));
        assert_eq!(sad.matches, vec![r"pattern: \bsaya\s+sedih\b".to_string()]);
    }

    #[test]
    fn test_unmatched_categories_are_omitted() {
        let lexicon = small_lexicon();
        let scores = EmotionScorer::new(&lexicon).score("sad day");
        assert!(scores.contains(Emotion::Sadness));
        assert!(!scores.contains(Emotion::Happiness));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let lexicon = small_lexicon();
        let scores = EmotionScorer::new(&lexicon).score("sadly");
        assert!(approx(scores.get(Emotion::Sadness).unwrap().score, 1.0));
    }

    #[test]
    fn test_word_boundary_mode_skips_inner_hits() {
        let lexicon = small_lexicon();
        let scorer = EmotionScorer::new(&lexicon).with_mode(MatchMode::WordBoundary);
        assert!(scorer.score("sadly").is_empty());
        let scores = scorer.score("sad, sadly, sad!");
        assert!(approx(scores.get(Emotion::Sadness).unwrap().score, 2.0));
    }

    #[test]
    fn test_matches_keep_discovery_order() {
        let lexicon = Lexicon::builtin().unwrap();
        let scores = EmotionScorer::new(&lexicon).score("Maaf ya, saya salah tadi");
        let regret = scores.get(Emotion::Regret).unwrap();
        assert_eq!(regret.matches[0], "salah");
        assert_eq!(regret.matches[1], "maaf");
        assert!(regret.matches[2].starts_with("pattern: "));
        assert_eq!(regret.matches.len(), 4);
    }

    #[test]
    fn test_try_score_accepts_builtin() {
        let lexicon = Lexicon::builtin().unwrap();
        let scores = EmotionScorer::new(&lexicon).try_score("saya marah").unwrap();
        assert!(scores.contains(Emotion::Anger));
    }

    #[test]
    fn test_confidence_never_exceeds_one() {
        let lexicon = Lexicon::builtin().unwrap();
        let scores = EmotionScorer::new(&lexicon).score("marah marah marah marah marah apa-apaan");
        for (_, score) in scores.iter() {
            assert!(score.confidence >= 0.0 && score.confidence <= 1.0);
        }
    }
}
