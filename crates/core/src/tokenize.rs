//! Word, sentence and paragraph tokenization.
//!
//! Every count in the pipeline goes through these helpers so that word counts
//! agree between the reflow budget, the readability score and keyword density.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static SENTENCE_WITH_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Iterates over the whitespace-delimited words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Counts whitespace-delimited words.
///
/// Leading, trailing and repeated whitespace (including newlines) behave like
/// a single separator.
///
/// ```rust
/// use scribo_core::count_words;
///
/// assert_eq!(count_words(""), 0);
/// assert_eq!(count_words("  a   b  "), 2);
/// ```
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Splits text into sentences on runs of `.`, `!` and `?`.
///
/// Segments that are empty once trimmed are dropped. The returned slices keep
/// their surrounding whitespace; callers trim when they need to.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Sentences with their terminating punctuation kept, trimmed.
///
/// Used for display (captions, summaries) where [`split_sentences`] would drop
/// the punctuation.
pub fn sentences_with_terminators(text: &str) -> Vec<&str> {
    SENTENCE_WITH_TERMINATOR
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty() && !s.chars().all(|c| matches!(c, '.' | '!' | '?')))
        .collect()
}

/// Number of non-empty sentences in `text`.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

/// Lowercases a word and strips every non-alphabetic character.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits raw text into paragraphs at line boundaries.
///
/// Lines are trimmed and blank lines dropped; order is preserved.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits text into blocks separated by blank lines.
///
/// Used where a paragraph may span several lines, such as rendered markdown.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}
