//! Word-budgeted reflow of source paragraphs into a sectioned document.
//!
//! Paragraphs are kept in source order and only ever truncated or omitted.
//! The kept paragraphs become an Introduction, up to [`MAX_SECTIONS`] titled
//! body sections and a templated Conclusion.
//!
//! # Example
//!
//! ```rust
//! use scribo_core::{ReflowConfig, reflow};
//!
//! let paragraphs = vec!["An opening paragraph.", "Some body text.", "More body text."];
//! let config = ReflowConfig::builder().min_words(5).max_words(20).build();
//! let doc = reflow(&paragraphs, &config, "Rust");
//!
//! assert_eq!(doc.introduction, "An opening paragraph.");
//! assert_eq!(doc.sections.len(), 1);
//! assert!(doc.conclusion.contains("Rust"));
//! ```

use crate::tokenize::{count_words, words};
use crate::{Result, ScriboError};
use serde::{Deserialize, Serialize};

/// Maximum number of body sections between Introduction and Conclusion.
pub const MAX_SECTIONS: usize = 4;

/// Appended to a paragraph cut short to fill the word budget.
pub const TRUNCATION_MARKER: &str = "...";

pub const INTRODUCTION_TITLE: &str = "Introduction";
pub const CONCLUSION_TITLE: &str = "Conclusion";

/// Body section titles, cycled by section index. `{topic}` is substituted.
pub const TITLE_TEMPLATES: [&str; 10] = [
    "Understanding {topic}",
    "The History of {topic}",
    "Key Aspects of {topic}",
    "{topic} in Practice",
    "The Impact of {topic}",
    "Exploring {topic} Further",
    "Modern Perspectives on {topic}",
    "Challenges Surrounding {topic}",
    "The Future of {topic}",
    "Why {topic} Matters",
];

const CONCLUSION_TEMPLATE: &str = "In conclusion, {topic} remains a subject of lasting significance. \
The ideas explored above show how {topic} has developed over time and why it continues to draw attention today. \
As new research and perspectives emerge, our understanding of {topic} will keep growing.";

/// Word budget for a reflowed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowConfig {
    /// Lower bound on body words when the source has enough material (default: 1000).
    pub min_words: usize,
    /// Upper bound on body words (default: 1200).
    pub max_words: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self { min_words: 1000, max_words: 1200 }
    }
}

impl ReflowConfig {
    /// Creates a new builder for ReflowConfig.
    pub fn builder() -> ReflowConfigBuilder {
        ReflowConfigBuilder::new()
    }

    /// Checks that the bounds describe a usable budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            return Err(ScriboError::ConfigError("max_words must be greater than zero".to_string()));
        }
        if self.min_words > self.max_words {
            return Err(ScriboError::ConfigError(format!(
                "min_words ({}) exceeds max_words ({})",
                self.min_words, self.max_words
            )));
        }
        Ok(())
    }
}

/// Builder for ReflowConfig.
pub struct ReflowConfigBuilder {
    config: ReflowConfig,
}

impl ReflowConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ReflowConfig::default() }
    }

    /// Sets the minimum word count.
    pub fn min_words(mut self, value: usize) -> Self {
        self.config.min_words = value;
        self
    }

    /// Sets the maximum word count.
    pub fn max_words(mut self, value: usize) -> Self {
        self.config.max_words = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ReflowConfig {
        self.config
    }
}

impl Default for ReflowConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A titled group of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Introduction, body sections and Conclusion for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedDocument {
    pub topic: String,
    /// First kept paragraph, verbatim. Empty when the source had none.
    pub introduction: String,
    pub sections: Vec<Section>,
    pub conclusion: String,
}

impl SectionedDocument {
    /// All sections in reading order, Introduction first and Conclusion last.
    pub fn all_sections(&self) -> Vec<Section> {
        let mut all = Vec::with_capacity(self.sections.len() + 2);
        let intro = if self.introduction.is_empty() { vec![] } else { vec![self.introduction.clone()] };
        all.push(Section { title: INTRODUCTION_TITLE.to_string(), paragraphs: intro });
        all.extend(self.sections.iter().cloned());
        all.push(Section { title: CONCLUSION_TITLE.to_string(), paragraphs: vec![self.conclusion.clone()] });
        all
    }

    /// Words in the Introduction and body sections, excluding titles and Conclusion.
    pub fn body_word_count(&self) -> usize {
        count_words(&self.introduction)
            + self
                .sections
                .iter()
                .flat_map(|s| s.paragraphs.iter())
                .map(|p| count_words(p))
                .sum::<usize>()
    }

    /// Renders the document with `## **Title**` headings and blank-line separated paragraphs.
    pub fn to_markdown(&self) -> String {
        self.all_sections()
            .iter()
            .map(|section| {
                let mut block = format!("## **{}**", section.title);
                for paragraph in &section.paragraphs {
                    block.push_str("\n\n");
                    block.push_str(paragraph);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n"
    }
}

/// Title for the body section at `index`.
pub fn section_title(topic: &str, index: usize) -> String {
    TITLE_TEMPLATES[index % TITLE_TEMPLATES.len()].replace("{topic}", topic)
}

/// Closing paragraph for `topic`.
pub fn conclusion_for(topic: &str) -> String {
    CONCLUSION_TEMPLATE.replace("{topic}", topic)
}

/// Selects the paragraphs that fit the word budget, truncating the last one if needed.
fn fit_to_budget<S: AsRef<str>>(paragraphs: &[S], config: &ReflowConfig) -> Vec<String> {
    let source: Vec<(&str, usize)> = paragraphs
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(|p| (p, count_words(p)))
        .collect();

    let mut kept = Vec::new();
    let mut current = 0;
    let mut next = 0;

    // A paragraph that would overflow max_words is never taken whole. Once the
    // minimum is met this ends the document; below it the fill step cuts it.
    while let Some(&(text, count)) = source.get(next) {
        if current + count > config.max_words {
            break;
        }
        kept.push(text.to_string());
        current += count;
        next += 1;
    }

    if current < config.min_words {
        for &(text, count) in &source[next..] {
            let remaining = config.min_words - current;
            if count <= remaining {
                kept.push(text.to_string());
                current += count;
                if current == config.min_words {
                    break;
                }
            } else {
                let prefix = words(text).take(remaining).collect::<Vec<_>>().join(" ");
                kept.push(format!("{prefix}{TRUNCATION_MARKER}"));
                break;
            }
        }
    }

    kept
}

/// Splits body paragraphs into at most [`MAX_SECTIONS`] titled sections.
fn build_sections(body: &[String], topic: &str) -> Vec<Section> {
    if body.is_empty() {
        return Vec::new();
    }

    let section_count = body.len().div_ceil(2).min(MAX_SECTIONS);
    let per_section = body.len().div_ceil(section_count);

    body.chunks(per_section)
        .enumerate()
        .map(|(index, chunk)| Section { title: section_title(topic, index), paragraphs: chunk.to_vec() })
        .collect()
}

/// Repartitions `paragraphs` into a word-budgeted [`SectionedDocument`].
///
/// The body word count lands in `[min_words, max_words]` whenever the source
/// holds at least `min_words` words; shorter sources are kept whole.
pub fn reflow<S: AsRef<str>>(paragraphs: &[S], config: &ReflowConfig, topic: &str) -> SectionedDocument {
    let kept = fit_to_budget(paragraphs, config);
    let (introduction, body) = match kept.split_first() {
        Some((first, rest)) => (first.clone(), rest),
        None => (String::new(), &[][..]),
    };

    SectionedDocument {
        topic: topic.to_string(),
        introduction,
        sections: build_sections(body, topic),
        conclusion: conclusion_for(topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn paragraph(words: usize, label: &str) -> String {
        (0..words).map(|i| format!("{label}{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_config_default() {
        let config = ReflowConfig::default();
        assert_eq!(config.min_words, 1000);
        assert_eq!(config.max_words, 1200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_and_validation() {
        let config = ReflowConfig::builder().min_words(300).max_words(200).build();
        assert!(matches!(config.validate(), Err(ScriboError::ConfigError(_))));

        let config = ReflowConfig::builder().min_words(0).max_words(0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_input() {
        let paragraphs: Vec<String> = Vec::new();
        let doc = reflow(&paragraphs, &ReflowConfig::default(), "Nothing");
        assert!(doc.introduction.is_empty());
        assert!(doc.sections.is_empty());
        assert!(doc.conclusion.contains("Nothing"));
        assert_eq!(doc.body_word_count(), 0);
    }

    #[test]
    fn test_short_source_kept_whole() {
        let paragraphs = vec![paragraph(50, "a"), paragraph(60, "b"), paragraph(70, "c")];
        let doc = reflow(&paragraphs, &ReflowConfig::default(), "Short");
        assert_eq!(doc.body_word_count(), 180);
        assert_eq!(doc.introduction, paragraphs[0]);
    }

    #[test]
    fn test_stops_before_overflowing_max() {
        let paragraphs: Vec<String> = (0..20).map(|i| paragraph(150, &format!("p{i}x"))).collect();
        let doc = reflow(&paragraphs, &ReflowConfig::default(), "Budget");
        // 8 * 150 = 1200 fits exactly, the ninth would overflow
        assert_eq!(doc.body_word_count(), 1200);
        assert!(!doc.to_markdown().contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncates_to_minimum() {
        let paragraphs = vec![paragraph(900, "a"), paragraph(500, "b"), paragraph(10, "c")];
        let doc = reflow(&paragraphs, &ReflowConfig::default(), "Fill");
        assert_eq!(doc.body_word_count(), 1000);

        let last = doc.sections.last().unwrap().paragraphs.last().unwrap();
        assert!(last.ends_with(TRUNCATION_MARKER));
        assert!(last.starts_with("b0 b1"));
        assert!(!doc.to_markdown().contains("c0"));
    }

    #[test]
    fn test_oversized_first_paragraph_is_cut() {
        let paragraphs = vec![paragraph(5000, "w")];
        let doc = reflow(&paragraphs, &ReflowConfig::default(), "Huge");
        assert_eq!(doc.body_word_count(), 1000);
        assert!(doc.introduction.ends_with("w999..."));
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let paragraphs: Vec<String> = (0..6).map(|i| format!("Paragraph number {i}.")).collect();
        let config = ReflowConfig::builder().min_words(1).max_words(100).build();
        let doc = reflow(&paragraphs, &config, "Order");

        let flattened: Vec<String> = std::iter::once(doc.introduction.clone())
            .chain(doc.sections.iter().flat_map(|s| s.paragraphs.clone()))
            .collect();
        assert_eq!(flattened, paragraphs);
    }

    #[test]
    fn test_blank_paragraphs_omitted() {
        let paragraphs = vec!["", "  ", "Real intro.", "\n", "Body."];
        let config = ReflowConfig::builder().min_words(1).max_words(100).build();
        let doc = reflow(&paragraphs, &config, "Blank");
        assert_eq!(doc.introduction, "Real intro.");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].paragraphs, vec!["Body."]);
    }

    #[rstest]
    #[case(1, vec![1])]
    #[case(2, vec![2])]
    #[case(3, vec![2, 1])]
    #[case(5, vec![2, 2, 1])]
    #[case(7, vec![2, 2, 2, 1])]
    #[case(8, vec![2, 2, 2, 2])]
    #[case(9, vec![3, 3, 3])]
    #[case(12, vec![3, 3, 3, 3])]
    fn test_section_distribution(#[case] body: usize, #[case] expected: Vec<usize>) {
        let paragraphs: Vec<String> = (0..=body).map(|i| format!("Para {i}.")).collect();
        let config = ReflowConfig::builder().min_words(1).max_words(1000).build();
        let doc = reflow(&paragraphs, &config, "T");
        let sizes: Vec<usize> = doc.sections.iter().map(|s| s.paragraphs.len()).collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn test_section_titles_cycle() {
        assert_eq!(section_title("Rust", 0), "Understanding Rust");
        assert_eq!(section_title("Rust", 3), "Rust in Practice");
        assert_eq!(section_title("Rust", 10), section_title("Rust", 0));
        assert_eq!(section_title("Rust", 13), section_title("Rust", 3));
    }

    #[test]
    fn test_all_sections_order() {
        let paragraphs = vec!["Intro.", "One.", "Two.", "Three."];
        let config = ReflowConfig::builder().min_words(1).max_words(100).build();
        let doc = reflow(&paragraphs, &config, "Testing");
        let all = doc.all_sections();

        assert_eq!(all.first().unwrap().title, INTRODUCTION_TITLE);
        assert_eq!(all[1].title, "Understanding Testing");
        assert_eq!(all[2].title, "The History of Testing");
        assert_eq!(all.last().unwrap().title, CONCLUSION_TITLE);
    }

    #[test]
    fn test_to_markdown() {
        let paragraphs = vec!["Intro text.", "Body one.", "Body two."];
        let config = ReflowConfig::builder().min_words(1).max_words(100).build();
        let markdown = reflow(&paragraphs, &config, "Bees").to_markdown();

        assert!(markdown.starts_with("## **Introduction**\n\nIntro text.\n\n"));
        assert!(markdown.contains("## **Understanding Bees**\n\nBody one.\n\nBody two."));
        assert!(markdown.contains("## **Conclusion**\n\nIn conclusion, Bees"));
        assert!(markdown.ends_with('\n'));
    }
}
