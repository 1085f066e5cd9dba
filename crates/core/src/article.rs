//! Generated article type with content, analysis and format conversion.
//!
//! [`GeneratedArticle`] is the complete result of one generation request: the
//! sectioned document, its markdown rendering, and the metrics computed by
//! re-tokenizing that rendering.

use crate::formatters::json::{JsonConfig, convert_to_json};
use crate::formatters::markdown::{MarkdownConfig, convert_to_markdown};
use crate::formatters::text::{TextConfig, convert_to_text};
use crate::readability::{ReadabilityReport, analyze_readability};
use crate::reflow::SectionedDocument;
use crate::seo::{SeoReport, extract_seo};
use crate::social::{DEFAULT_HASHTAG_LIMIT, generate_hashtags};
use crate::tokenize::count_words;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Output format options for article content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown with `##` section markers.
    Markdown,
    /// Plain text with underlined section titles.
    PlainText,
    /// JSON (structured data).
    Json,
}

/// The complete result of generating an article for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// Topic the article was generated for.
    pub topic: String,

    /// Sectioned structure the content was rendered from.
    pub document: SectionedDocument,

    /// Markdown rendering of `document`.
    pub content: String,

    /// Length of content in characters.
    pub length: usize,

    /// Word count of the rendered content.
    pub word_count: usize,

    /// Estimated reading time in minutes.
    pub reading_time: f64,

    /// Readability of the rendered content.
    pub readability: ReadabilityReport,

    /// Description, keywords and keyword density.
    pub seo: SeoReport,

    /// Topic and keyword hashtags.
    pub hashtags: Vec<String>,
}

impl GeneratedArticle {
    /// Creates an article from a reflowed document.
    ///
    /// Renders the document to markdown and derives every metric from that
    /// rendering; `source_text` is only used as a description fallback.
    pub fn new(document: SectionedDocument, source_text: &str, words_per_minute: f64) -> Self {
        let content = document.to_markdown();
        let length = content.chars().count();
        let word_count = count_words(&content);
        let reading_time = if words_per_minute > 0.0 { word_count as f64 / words_per_minute } else { 0.0 };
        let readability = analyze_readability(&content);
        let seo = extract_seo(source_text, &content, &document.topic);
        let hashtags = generate_hashtags(&document.topic, &seo.keywords, DEFAULT_HASHTAG_LIMIT);

        Self {
            topic: document.topic.clone(),
            document,
            content,
            length,
            word_count,
            reading_time,
            readability,
            seo,
            hashtags,
        }
    }

    /// Converts content to the specified format.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::PlainText => Ok(self.to_text()),
            OutputFormat::Json => self.to_json().map(|v| v.to_string()),
        }
    }

    /// Gets content as Markdown.
    pub fn to_markdown(&self) -> String {
        self.content.clone()
    }

    /// Gets content as Markdown with custom configuration.
    pub fn to_markdown_with_config(&self, config: &MarkdownConfig) -> Result<String> {
        convert_to_markdown(self, config)
    }

    /// Gets the article as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Gets the article as a JSON string with custom configuration.
    pub fn to_json_with_config(&self, config: &JsonConfig) -> Result<String> {
        convert_to_json(self, config)
    }

    /// Gets content as plain text.
    pub fn to_text(&self) -> String {
        convert_to_text(&self.document, &TextConfig::default())
    }
}
