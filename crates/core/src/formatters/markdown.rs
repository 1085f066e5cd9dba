use crate::Result;
use crate::article::GeneratedArticle;

/// Configuration for Markdown output
#[derive(Debug, Clone, Default)]
pub struct MarkdownConfig {
    /// Include TOML frontmatter with article metadata
    pub include_frontmatter: bool,
    /// Include the topic as H1 heading at the start of content
    pub include_title_heading: bool,
}

/// Render an article as Markdown with optional frontmatter and title heading
pub fn convert_to_markdown(article: &GeneratedArticle, config: &MarkdownConfig) -> Result<String> {
    let mut output = String::new();

    if config.include_frontmatter {
        output.push_str(&generate_frontmatter(article));
        output.push('\n');
    }

    if config.include_title_heading {
        output.push_str(&format!("# {}\n\n", article.topic));
    }

    output.push_str(&article.content);

    Ok(output)
}

/// Generate TOML frontmatter from article metadata
fn generate_frontmatter(article: &GeneratedArticle) -> String {
    let mut frontmatter = String::from("+++");

    frontmatter.push_str(&format!("\ntitle = {}", toml_escape_string(&article.seo.title)));
    frontmatter.push_str(&format!("\ntopic = {}", toml_escape_string(&article.topic)));

    if !article.seo.description.is_empty() {
        frontmatter.push_str(&format!(
            "\ndescription = {}",
            toml_escape_string(&article.seo.description)
        ));
    }

    frontmatter.push_str(&format!("\nword_count = {}", article.word_count));
    frontmatter.push_str(&format!("\nreading_time_minutes = {:.1}", article.reading_time));
    frontmatter.push_str(&format!("\nreadability = {:.1}", article.readability.score));

    if !article.seo.keywords.is_empty() {
        let keywords: Vec<String> = article.seo.keywords.iter().map(|k| toml_escape_string(k)).collect();
        frontmatter.push_str(&format!("\nkeywords = [{}]", keywords.join(", ")));
    }

    frontmatter.push_str("\n+++\n");

    frontmatter
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let needs_escape = s.contains('"') || s.contains('\\') || s.contains('\n');
    if needs_escape {
        format!(
            "\"{}\"",
            s.replace('\\', "\\\\").replace('\"', "\\\"").replace('\n', "\\n")
        )
    } else {
        format!("\"{}\"", s)
    }
}

/// Markdown formatter with configurable options
pub struct MarkdownFormatter {
    config: MarkdownConfig,
}

impl MarkdownFormatter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, article: &GeneratedArticle) -> Result<String> {
        convert_to_markdown(article, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ArticleGenerator;

    fn article() -> GeneratedArticle {
        ArticleGenerator::new()
            .generate(
                "Honey \"Bees\"",
                "Honey bees are social insects.\nBees build hives from wax.\nHives hold honey.",
            )
            .unwrap()
    }

    #[test]
    fn test_plain_conversion_is_content() {
        let article = article();
        let markdown = convert_to_markdown(&article, &MarkdownConfig::default()).unwrap();
        assert_eq!(markdown, article.content);
    }

    #[test]
    fn test_frontmatter_generation() {
        let article = article();
        let frontmatter = generate_frontmatter(&article);

        assert!(frontmatter.starts_with("+++\n"));
        assert!(frontmatter.ends_with("\n+++\n"));
        assert!(frontmatter.contains(r#"title = "Honey \"Bees\"""#));
        assert!(frontmatter.contains("description = \"Honey bees are social insects.\""));
        assert!(frontmatter.contains(&format!("word_count = {}", article.word_count)));
        assert!(frontmatter.contains("keywords = [\"honey\""));
    }

    #[test]
    fn test_title_heading() {
        let article = article();
        let config = MarkdownConfig { include_title_heading: true, ..Default::default() };
        let markdown = convert_to_markdown(&article, &config).unwrap();
        assert!(markdown.starts_with("# Honey \"Bees\"\n\n## **Introduction**"));
    }

    #[test]
    fn test_frontmatter_precedes_heading() {
        let article = article();
        let config = MarkdownConfig { include_frontmatter: true, include_title_heading: true };
        let markdown = convert_to_markdown(&article, &config).unwrap();
        let fence_end = markdown.find("+++\n\n# ").unwrap();
        assert!(fence_end > 0);
    }

    #[test]
    fn test_toml_escape_with_quotes() {
        let escaped = toml_escape_string("My \"Title\" here");
        assert_eq!(escaped, r#""My \"Title\" here""#);
    }

    #[test]
    fn test_toml_escape_with_newlines() {
        let escaped = toml_escape_string("Line 1\nLine 2");
        assert_eq!(escaped, r#""Line 1\nLine 2""#);
    }

    #[test]
    fn test_markdown_formatter() {
        let article = article();
        let config = MarkdownConfig { include_frontmatter: true, ..Default::default() };
        let formatter = MarkdownFormatter::new(config.clone());
        assert_eq!(
            formatter.convert(&article).unwrap(),
            convert_to_markdown(&article, &config).unwrap()
        );
    }
}
