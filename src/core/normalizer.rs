//! Text normalizer: lowercase, strip noise, collapse whitespace
//!
//! Keeps `!`, `?`, `.` and `-` since they carry emotional signal.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is not a letter, number, underscore, whitespace, or ! ? . -
    /// Marks, variation selectors and joiners count as noise.
    static ref RE_NOISE: Regex = Regex::new(r"[^\p{L}\p{N}_\s!?.\-]").unwrap();

    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize raw text for matching. Empty input gives an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = RE_NOISE.replace_all(&lowered, " ");
    RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn test_lowercases_and_strips_commas() {
        assert_eq!(normalize("Maaf ya, saya SALAH tadi"), "maaf ya saya salah tadi");
    }

    #[test]
    fn test_keeps_signal_punctuation() {
        assert_eq!(normalize("Apa-apaan ini?!  Serius..."), "apa-apaan ini?! serius...");
    }

    #[test]
    fn test_apostrophes_become_spaces() {
        assert_eq!(normalize("I didn't do it"), "i didn t do it");
    }

    #[test]
    fn test_emoji_removed() {
        assert_eq!(normalize("senang 😊 sekali"), "senang sekali");
    }

    #[test]
    fn test_emoji_modifiers_removed() {
        assert_eq!(normalize("\u{2764}\u{fe0f}Saya sedih"), "saya sedih");
        assert_eq!(normalize("\u{1f468}\u{200d}\u{1f469} keluarga"), "keluarga");
    }

    #[test]
    fn test_combining_marks_removed() {
        assert_eq!(normalize("cafe\u{301} ok"), "cafe ok");
    }

    #[test]
    fn test_other_numerals_kept() {
        assert_eq!(normalize("x\u{b2} \u{bd}"), "x\u{b2} \u{bd}");
        assert_eq!(normalize("under_score 42"), "under_score 42");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Saya sangat marah dengan pelayanan ini!",
            "  Terima   kasih,\tatas bantuannya ",
            "WHY?? (because) #reasons @you",
            "Ümlaut — dash – and 'quotes'",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {:?}", s);
        }
    }
}
