//! Heuristic syllable estimation.
//!
//! Counts vowel groups of one or two letters and corrects for the common
//! silent endings. Every word contributes at least one syllable.

use crate::tokenize::{clean_word, words};
use regex::Regex;
use std::sync::LazyLock;

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());
static ALL_VOWELS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[aeiouy]+$").unwrap());

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates the syllables in a single word.
///
/// The word is lowercased and stripped of non-alphabetic characters first.
/// Words shorter than three letters, or made only of vowels, count as one.
///
/// `-es` always drops a syllable; `-ed` drops one only when the letter before
/// it is a consonant (`jumped` → 1, `agreed` → 2).
pub fn word_syllables(word: &str) -> usize {
    let cleaned = clean_word(word);

    if cleaned.len() < 3 || ALL_VOWELS.is_match(&word.to_lowercase()) {
        return 1;
    }

    let mut count = VOWEL_GROUP.find_iter(&cleaned).count().max(1) as isize;

    if cleaned.ends_with('e') && !cleaned.ends_with("le") {
        count -= 1;
    }

    if cleaned.ends_with("es") {
        count -= 1;
    } else if let Some(stem) = cleaned.strip_suffix("ed")
        && stem.chars().last().is_some_and(|c| !is_vowel(c))
    {
        count -= 1;
    }

    count.max(1) as usize
}

/// Sums [`word_syllables`] over every whitespace-delimited word in `text`.
///
/// ```rust
/// use scribo_core::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert!(count_syllables("beautiful") >= 2);
/// ```
pub fn count_syllables(text: &str) -> usize {
    words(text).map(word_syllables).sum()
}
