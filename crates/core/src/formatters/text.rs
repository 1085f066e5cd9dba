use crate::reflow::SectionedDocument;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include the topic as an underlined header
    pub include_header: bool,
}

/// Plain text formatter for sectioned documents
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Convert a document to plain text
    pub fn convert(&self, document: &SectionedDocument) -> String {
        convert_to_text(document, &self.config)
    }
}

/// Convert a sectioned document to plain text with specified configuration
///
/// Section titles become underlined lines; paragraphs are separated by
/// blank lines.
pub fn convert_to_text(document: &SectionedDocument, config: &TextConfig) -> String {
    let mut blocks = Vec::new();

    if config.include_header && !document.topic.is_empty() {
        blocks.push(underline(&document.topic, '='));
    }

    for section in document.all_sections() {
        blocks.push(underline(&section.title, '-'));
        for paragraph in &section.paragraphs {
            blocks.push(wrap_text(paragraph, config.line_width));
        }
    }

    blocks.join("\n\n")
}

fn underline(title: &str, marker: char) -> String {
    format!("{}\n{}", title, marker.to_string().repeat(title.chars().count()))
}

/// Wrap text to specified line width
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
