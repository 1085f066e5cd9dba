//! Readability scoring using the Flesch-Kincaid grade level.
//!
//! Formula: `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
//!
//! The score is rounded to one decimal place with round-half-up semantics
//! (`floor(x * 10 + 0.5) / 10`), so `-0.05` rounds to `0.0` and `0.05` to `0.1`.
//!
//! # Example
//!
//! ```rust
//! use scribo_core::readability::{ReadabilityBand, analyze_readability, readability_score};
//!
//! assert_eq!(readability_score("no terminator and no score"), 0.0);
//!
//! let report = analyze_readability("The cat sat on the mat. The dog ran fast.");
//! assert_eq!(report.sentences, 2);
//! assert_eq!(report.band, ReadabilityBand::Elementary);
//! ```

use crate::syllables::count_syllables;
use crate::tokenize::{count_sentences, count_words};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds to one decimal place, halves rounding towards positive infinity.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Interpretation band for a readability score. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    Elementary,
    MiddleSchool,
    HighSchool,
    EarlyCollege,
    College,
    Graduate,
}

impl ReadabilityBand {
    /// Maps a grade-level score to its band.
    pub fn from_score(score: f64) -> Self {
        if score < 6.0 {
            Self::Elementary
        } else if score < 8.0 {
            Self::MiddleSchool
        } else if score < 10.0 {
            Self::HighSchool
        } else if score < 12.0 {
            Self::EarlyCollege
        } else if score < 14.0 {
            Self::College
        } else {
            Self::Graduate
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School",
            Self::EarlyCollege => "Early College",
            Self::College => "College",
            Self::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Grade-level score, one decimal place.
    pub score: f64,
    /// Band the score falls into.
    pub band: ReadabilityBand,
    /// Number of non-empty sentences.
    pub sentences: usize,
    /// Number of whitespace-delimited words.
    pub words: usize,
    /// Total estimated syllables.
    pub syllables: usize,
}

fn grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    round_to_tenth(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Computes the readability score of `text`.
///
/// Returns `0.0` for text without words, without sentences, or without any
/// sentence-terminating punctuation.
pub fn readability_score(text: &str) -> f64 {
    analyze_readability(text).score
}

/// Computes the score together with the counts it was derived from.
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let sentences = count_sentences(text);
    let words = count_words(text);
    let syllables = count_syllables(text);
    let score = if text.contains(['.', '!', '?']) { grade(words, sentences, syllables) } else { 0.0 };

    ReadabilityReport { score, band: ReadabilityBand::from_score(score), sentences, words, syllables }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(readability_score(""), 0.0);
        assert_eq!(readability_score("   \n "), 0.0);
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        let report = analyze_readability("... !!! ???");
        assert_eq!(report.sentences, 0);
        assert_eq!(report.score, 0.0);
    }

    #[rstest]
    #[case("hello")]
    #[case("hello world")]
    #[case("no terminator and no score")]
    #[case("a line\n\nanother line without an ending")]
    fn test_unterminated_text_scores_zero(#[case] text: &str) {
        let report = analyze_readability(text);
        assert!(report.words > 0);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.band, ReadabilityBand::Elementary);
    }

    #[test]
    fn test_single_terminator_enables_scoring() {
        assert_ne!(readability_score("The implementation necessitated documentation."), 0.0);
    }

    #[test]
    fn test_known_score() {
        // 10 words, 2 sentences, 10 syllables: 0.39 * 5 + 11.8 * 1 - 15.59 = -1.84
        let report = analyze_readability("The cat sat on the mat. The dog ran fast.");
        assert_eq!(report.words, 10);
        assert_eq!(report.sentences, 2);
        assert_eq!(report.syllables, 10);
        assert_eq!(report.score, -1.8);
    }

    #[test]
    fn test_complex_text_scores_higher() {
        let simple = readability_score("The cat sat on the mat. The dog ran fast.");
        let complex = readability_score(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated the establishment of interdepartmental \
             communication protocols that facilitated the dissemination of \
             procedural documentation.",
        );
        assert!(complex > simple);
        assert!(complex >= 14.0);
    }

    #[rstest]
    #[case(0.04, 0.0)]
    #[case(0.05, 0.1)]
    #[case(-1.84, -1.8)]
    #[case(-0.05, 0.0)]
    #[case(12.349, 12.3)]
    fn test_round_to_tenth(#[case] value: f64, #[case] expected: f64) {
        assert!((round_to_tenth(value) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(-3.0, ReadabilityBand::Elementary)]
    #[case(5.9, ReadabilityBand::Elementary)]
    #[case(6.0, ReadabilityBand::MiddleSchool)]
    #[case(9.9, ReadabilityBand::HighSchool)]
    #[case(11.0, ReadabilityBand::EarlyCollege)]
    #[case(13.9, ReadabilityBand::College)]
    #[case(14.0, ReadabilityBand::Graduate)]
    fn test_band_from_score(#[case] score: f64, #[case] band: ReadabilityBand) {
        assert_eq!(ReadabilityBand::from_score(score), band);
    }

    #[test]
    fn test_band_label() {
        assert_eq!(ReadabilityBand::MiddleSchool.to_string(), "Middle School");
    }
}
