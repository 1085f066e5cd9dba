//! Article generation: source text in, sectioned and analysed article out.
//!
//! [`ArticleGenerator`] ties the pipeline together. Source text is split into
//! paragraphs, reflowed into a word-budgeted [`SectionedDocument`], rendered to
//! markdown, and the rendering is re-tokenized for every reported metric.
//!
//! # Example
//!
//! ```rust
//! use scribo_core::{ArticleGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::builder().min_words(5).max_words(50).build();
//! let generator = ArticleGenerator::with_config(config);
//! let article = generator
//!     .generate("Bees", "Bees make honey.\nThey live in large colonies called hives.")
//!     .unwrap();
//!
//! assert!(article.content.starts_with("## **Introduction**"));
//! assert_eq!(article.hashtags[0], "#Bees");
//! ```
//!
//! [`SectionedDocument`]: crate::reflow::SectionedDocument

use crate::article::GeneratedArticle;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_sources};
use crate::reflow::{ReflowConfig, reflow};
use crate::tokenize::split_paragraphs;
use crate::{Result, ScriboError};

/// Configuration for article generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Word budget for the body.
    pub reflow: ReflowConfig,

    /// Reading speed used for the reading time estimate (default: 200).
    pub words_per_minute: f64,

    /// Source fetching settings.
    #[cfg(feature = "fetch")]
    pub fetch: FetchConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reflow: ReflowConfig::default(),
            words_per_minute: 200.0,
            #[cfg(feature = "fetch")]
            fetch: FetchConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new builder for GeneratorConfig.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        self.reflow.validate()?;
        if self.words_per_minute.is_nan() || self.words_per_minute <= 0.0 {
            return Err(ScriboError::ConfigError(format!(
                "words_per_minute must be positive, got {}",
                self.words_per_minute
            )));
        }
        Ok(())
    }
}

/// Builder for GeneratorConfig.
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    /// Sets the minimum body word count.
    pub fn min_words(mut self, value: usize) -> Self {
        self.config.reflow.min_words = value;
        self
    }

    /// Sets the maximum body word count.
    pub fn max_words(mut self, value: usize) -> Self {
        self.config.reflow.max_words = value;
        self
    }

    /// Sets the reading speed.
    pub fn words_per_minute(mut self, value: f64) -> Self {
        self.config.words_per_minute = value;
        self
    }

    /// Sets the source fetching settings.
    #[cfg(feature = "fetch")]
    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates articles from source text.
#[derive(Debug, Clone, Default)]
pub struct ArticleGenerator {
    config: GeneratorConfig,
}

impl ArticleGenerator {
    /// Creates a generator with default settings (1000 to 1200 body words).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates an article for `topic` from raw source text, one paragraph per line.
    ///
    /// Only an invalid configuration is an error. Empty source text produces
    /// an article with an empty Introduction and the Conclusion.
    #[tracing::instrument(skip(self, source_text), fields(source_words = crate::count_words(source_text)))]
    pub fn generate(&self, topic: &str, source_text: &str) -> Result<GeneratedArticle> {
        let paragraphs = split_paragraphs(source_text);
        self.generate_from_paragraphs(topic, &paragraphs, source_text)
    }

    /// Generates an article from pre-split paragraphs.
    ///
    /// `source_text` is used as the SEO description fallback.
    pub fn generate_from_paragraphs<S: AsRef<str>>(
        &self, topic: &str, paragraphs: &[S], source_text: &str,
    ) -> Result<GeneratedArticle> {
        self.config.validate()?;

        let document = reflow(paragraphs, &self.config.reflow, topic.trim());
        tracing::debug!(
            sections = document.sections.len(),
            body_words = document.body_word_count(),
            "reflowed source"
        );

        let article = GeneratedArticle::new(document, source_text, self.config.words_per_minute);
        tracing::info!(words = article.word_count, score = article.readability.score, "generated article");
        Ok(article)
    }

    /// Fetches source content for `topic` and generates an article from it.
    ///
    /// Fetch errors propagate unchanged.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_generate(&self, topic: &str) -> Result<GeneratedArticle> {
        self.config.validate()?;
        let source_text = fetch_sources(topic, &self.config.fetch).await?;
        self.generate(topic, &source_text)
    }
}

/// Generates an article with default settings.
///
/// ```rust
/// let article = scribo_core::generate("Tides", "The moon pulls on the oceans.").unwrap();
/// assert_eq!(article.topic, "Tides");
/// ```
pub fn generate(topic: &str, source_text: &str) -> Result<GeneratedArticle> {
    ArticleGenerator::new().generate(topic, source_text)
}

/// Fetches sources for `topic` and generates an article with default settings.
#[cfg(feature = "fetch")]
pub async fn fetch_and_generate(topic: &str) -> Result<GeneratedArticle> {
    ArticleGenerator::new().fetch_and_generate(topic).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::{CONCLUSION_TITLE, INTRODUCTION_TITLE};
    use crate::tokenize::count_words;

    fn long_source(paragraphs: usize, words_each: usize) -> String {
        (0..paragraphs)
            .map(|p| {
                let sentence = (0..words_each).map(|w| format!("term{}", (p + w) % 37)).collect::<Vec<_>>();
                format!("{}.", sentence.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::builder().min_words(10).max_words(20).words_per_minute(250.0).build();
        assert_eq!(config.reflow.min_words, 10);
        assert_eq!(config.reflow.max_words, 20);
        assert_eq!(config.words_per_minute, 250.0);
    }

    #[test]
    fn test_invalid_config() {
        let generator = ArticleGenerator::with_config(GeneratorConfig::builder().min_words(50).max_words(10).build());
        assert!(matches!(generator.generate("X", "text"), Err(ScriboError::ConfigError(_))));

        let generator = ArticleGenerator::with_config(GeneratorConfig::builder().words_per_minute(0.0).build());
        assert!(matches!(generator.generate("X", "text"), Err(ScriboError::ConfigError(_))));
    }

    #[test]
    fn test_generate_long_source() {
        let source = long_source(60, 30);
        let article = ArticleGenerator::new().generate("Testing", &source).unwrap();
        let sections = article.document.all_sections();

        assert!(article.word_count >= 1000);
        let body = article.document.body_word_count();
        assert!((1000..=1200).contains(&body), "body words: {body}");
        assert_eq!(sections.first().map(|s| s.title.as_str()), Some(INTRODUCTION_TITLE));
        let last = sections.last().unwrap();
        assert_eq!(last.title, CONCLUSION_TITLE);
        assert!(last.paragraphs[0].contains("Testing"));
        assert!(article.document.sections.len() <= 4);
    }

    #[test]
    fn test_metrics_come_from_rendered_content() {
        let article = generate("Bees", "Bees make honey.\n\nThey live in hives.").unwrap();
        assert_eq!(article.word_count, count_words(&article.content));
        assert!(article.content.contains("## **Conclusion**"));
        assert_eq!(article.document.introduction, "Bees make honey.");
    }

    #[test]
    fn test_empty_source() {
        let article = generate("Nothing", "").unwrap();
        assert!(article.document.introduction.is_empty());
        assert!(article.document.sections.is_empty());
        assert!(article.content.contains("Nothing"));
    }

    #[test]
    fn test_topic_is_trimmed() {
        let article = generate("  Bees ", "Bees make honey.").unwrap();
        assert_eq!(article.topic, "Bees");
    }
}
