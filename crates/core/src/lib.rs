pub mod article;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod generator;
pub mod readability;
pub mod reflow;
pub mod seo;
#[cfg(feature = "fetch")]
pub mod service;
pub mod social;
pub mod store;
pub mod syllables;
pub mod tokenize;

pub use article::{GeneratedArticle, OutputFormat};
pub use error::{Result, ScriboError};
#[cfg(feature = "fetch")]
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::{fetch_extract, fetch_file, fetch_sources, fetch_stdin, search_titles};
pub use formatters::{JsonConfig, JsonFormatter, MarkdownConfig, MarkdownFormatter, TextConfig, TextFormatter};
pub use formatters::{convert_to_json, convert_to_markdown, convert_to_text};
#[cfg(feature = "fetch")]
pub use generator::fetch_and_generate;
pub use generator::{ArticleGenerator, GeneratorConfig, GeneratorConfigBuilder, generate};
pub use readability::{ReadabilityBand, ReadabilityReport, analyze_readability, readability_score};
pub use reflow::{ReflowConfig, ReflowConfigBuilder, Section, SectionedDocument, reflow};
pub use seo::{KeywordStat, SeoReport, extract_seo, keyword_frequencies, meta_description};
#[cfg(feature = "fetch")]
pub use service::{AudioRef, ContentService, MockContentService};
pub use social::{generate_caption, generate_hashtags};
pub use store::{ArticleLibrary, FileStore, KeyValueStore, MemoryStore};
pub use syllables::{count_syllables, word_syllables};
pub use tokenize::{count_sentences, count_words, split_paragraphs, split_sentences};
