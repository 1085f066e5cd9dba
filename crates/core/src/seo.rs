//! Keyword frequency, keyword density and meta description extraction.

use crate::readability::round_to_tenth;
use crate::tokenize::{clean_word, count_words, split_blocks, words};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Words never reported as keywords.
pub const STOPWORDS: [&str; 24] = [
    "the", "and", "of", "to", "a", "in", "for", "is", "on", "that", "by", "this", "with", "i", "you", "it", "not",
    "or", "be", "are", "from", "at", "as", "your",
];

/// Longest meta description before truncation.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Number of entries in [`SeoReport::keywords`].
pub const TOP_KEYWORDS: usize = 10;

/// Number of entries in [`SeoReport::keyword_density`].
pub const TOP_DENSITY: usize = 5;

/// Occurrences of a keyword and its share of all words, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
}

/// SEO metadata for a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub keyword_density: Vec<KeywordStat>,
}

fn is_heading(block: &str) -> bool {
    block.trim_start().starts_with('#')
}

fn truncate_description(text: &str) -> String {
    let collapsed = words(text).collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > DESCRIPTION_MAX_CHARS {
        let cut: String = collapsed.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{}...", cut.trim_end())
    } else {
        collapsed
    }
}

/// First non-heading paragraph of `text`, truncated to [`DESCRIPTION_MAX_CHARS`].
pub fn meta_description(text: &str) -> Option<String> {
    split_blocks(text)
        .into_iter()
        .find(|block| !is_heading(block))
        .map(|block| truncate_description(&block))
}

/// Counts keyword candidates in first-seen order, most frequent first.
///
/// Ties keep the order in which the words first appeared.
pub fn keyword_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<(String, usize)> = Vec::new();

    for word in words(text) {
        let cleaned = clean_word(word);
        if cleaned.len() < 3 || STOPWORDS.contains(&cleaned.as_str()) {
            continue;
        }
        match index.get(&cleaned) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                index.insert(cleaned.clone(), tally.len());
                tally.push((cleaned, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
}

/// Builds the SEO report for generated content.
///
/// The description comes from `full_content`, falling back to `source_text`
/// when the content has no prose paragraph. Keyword statistics are computed
/// over `full_content`.
pub fn extract_seo(source_text: &str, full_content: &str, title: &str) -> SeoReport {
    let description = meta_description(full_content)
        .or_else(|| meta_description(source_text))
        .unwrap_or_default();

    let total_words = count_words(full_content);
    let frequencies = keyword_frequencies(full_content);

    let keywords = frequencies.iter().take(TOP_KEYWORDS).map(|(word, _)| word.clone()).collect();
    let keyword_density = frequencies
        .iter()
        .take(TOP_DENSITY)
        .map(|(word, count)| KeywordStat {
            keyword: word.clone(),
            count: *count,
            density: round_to_tenth(100.0 * *count as f64 / total_words as f64),
        })
        .collect();

    SeoReport { title: title.to_string(), description, keywords, keyword_density }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_skips_headings() {
        let content = "## **Introduction**\n\nRust is a systems language.\n\n## **Conclusion**\n\nDone.";
        assert_eq!(meta_description(content).unwrap(), "Rust is a systems language.");
    }

    #[test]
    fn test_description_truncated() {
        let long = "word ".repeat(60);
        let description = meta_description(&long).unwrap();
        assert!(description.ends_with("..."));
        assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS + 3);
    }

    #[test]
    fn test_description_short_not_truncated() {
        assert_eq!(meta_description("Short text.").unwrap(), "Short text.");
    }

    #[test]
    fn test_description_falls_back_to_source() {
        let report = extract_seo("Source paragraph.", "## **Only Headings**", "T");
        assert_eq!(report.description, "Source paragraph.");
    }

    #[test]
    fn test_frequencies_filter_stopwords_and_short_words() {
        let freq = keyword_frequencies("The cat and the dog. A cat is on it; an ox.");
        assert_eq!(freq, vec![("cat".to_string(), 2), ("dog".to_string(), 1)]);
    }

    #[test]
    fn test_frequencies_case_and_punctuation_insensitive() {
        let freq = keyword_frequencies("Rust, rust! RUST? Crab.");
        assert_eq!(freq[0], ("rust".to_string(), 3));
        assert_eq!(freq[1], ("crab".to_string(), 1));
    }

    #[test]
    fn test_frequencies_ties_keep_first_seen_order() {
        let freq = keyword_frequencies("zebra apple mango apple zebra mango kiwi");
        let order: Vec<&str> = freq.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["zebra", "apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_extract_seo_density() {
        let content = "rust rust rust rust crab crab ferris the and of";
        let report = extract_seo("", content, "Rust");

        assert_eq!(report.title, "Rust");
        assert_eq!(report.keywords, vec!["rust", "crab", "ferris"]);
        assert_eq!(report.keyword_density.len(), 3);
        assert_eq!(report.keyword_density[0].count, 4);
        assert_eq!(report.keyword_density[0].density, 40.0);
        assert_eq!(report.keyword_density[1].density, 20.0);
        assert_eq!(report.keyword_density[2].density, 10.0);
    }

    #[test]
    fn test_extract_seo_limits() {
        let content: String = (0..30).map(|i| format!("keyword{} ", "x".repeat(i + 1))).collect();
        let report = extract_seo("", &content, "Many");
        assert_eq!(report.keywords.len(), TOP_KEYWORDS);
        assert_eq!(report.keyword_density.len(), TOP_DENSITY);

        let total: f64 = report.keyword_density.iter().map(|k| k.density).sum();
        assert!(total <= 100.0);
        assert!(report.keyword_density.iter().all(|k| k.density >= 0.0));
    }

    #[test]
    fn test_extract_seo_empty() {
        let report = extract_seo("", "", "Empty");
        assert!(report.description.is_empty());
        assert!(report.keywords.is_empty());
        assert!(report.keyword_density.is_empty());
    }

    #[test]
    fn test_extract_seo_deterministic() {
        let content = "Bees make honey. Honey bees live in hives. Hives hold honey and bees.";
        let first = extract_seo("", content, "Bees");
        let second = extract_seo("", content, "Bees");
        assert_eq!(first, second);
    }
}
