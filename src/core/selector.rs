//! Dominant emotion selection

use crate::types::{AnalysisResult, EmotionScores};

/// Pick the highest-scoring emotion. Ties go to the earliest category in
/// lexicon order. Empty scores give the neutral default.
pub fn select_dominant(scores: &EmotionScores, max_matches: usize) -> AnalysisResult {
    let mut ranked: Vec<_> = scores.iter().collect();
    // stable sort: equal scores keep lexicon order
    ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

    let Some((emotion, winner)) = ranked.first() else {
        return AnalysisResult::neutral_default();
    };

    AnalysisResult {
        emotion: *emotion,
        confidence: winner.confidence,
        emoticon: emotion.emoticon().to_string(),
        matches: winner.matches.iter().take(max_matches).cloned().collect(),
        all_scores: Some(scores.breakdown()),
        ..AnalysisResult::neutral_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, EmotionScore};
    use pretty_assertions::assert_eq;

    fn score(value: f64, n: usize) -> EmotionScore {
        EmotionScore::new(value, (0..n).map(|i| format!("m{}", i)).collect())
    }

    #[test]
    fn test_empty_is_neutral_default() {
        assert_eq!(select_dominant(&EmotionScores::new(), 5), AnalysisResult::neutral_default());
    }

    #[test]
    fn test_highest_score_wins() {
        let mut scores = EmotionScores::new();
        scores.insert(Emotion::Anger, score(1.0, 1));
        scores.insert(Emotion::Regret, score(3.0, 4));
        scores.insert(Emotion::Neutral, score(0.6, 2));

        let result = select_dominant(&scores, 5);
        assert_eq!(result.emotion, Emotion::Regret);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.emoticon, "😔");
        assert_eq!(result.all_scores.unwrap().len(), 3);
    }

    #[test]
    fn test_tie_goes_to_first_inserted() {
        let mut scores = EmotionScores::new();
        scores.insert(Emotion::Sadness, score(0.9, 1));
        scores.insert(Emotion::Happiness, score(0.9, 1));
        assert_eq!(select_dominant(&scores, 5).emotion, Emotion::Sadness);

        let mut scores = EmotionScores::new();
        scores.insert(Emotion::Happiness, score(0.9, 1));
        scores.insert(Emotion::Sadness, score(0.9, 1));
        assert_eq!(select_dominant(&scores, 5).emotion, Emotion::Happiness);
    }

    #[test]
    fn test_matches_truncated() {
        let mut scores = EmotionScores::new();
        scores.insert(Emotion::Anger, score(8.0, 8));
        let result = select_dominant(&scores, 5);
        assert_eq!(result.matches, vec!["m0", "m1", "m2", "m3", "m4"]);
    }
}
