//! Hashtag and caption helpers for sharing generated content.

use crate::tokenize::sentences_with_terminators;
use std::collections::HashSet;

/// Default number of hashtags produced by [`generate_hashtags`].
pub const DEFAULT_HASHTAG_LIMIT: usize = 8;

/// Default caption length, in characters.
pub const DEFAULT_CAPTION_CHARS: usize = 280;

fn pascal_case(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Builds hashtags from a topic and its keywords.
///
/// The topic comes first as `#PascalCase`, followed by one `#keyword` per
/// keyword. Duplicates are dropped case-insensitively.
///
/// ```rust
/// use scribo_core::generate_hashtags;
///
/// let tags = generate_hashtags("machine learning", &["data".to_string(), "model".to_string()], 8);
/// assert_eq!(tags, vec!["#MachineLearning", "#data", "#model"]);
/// ```
pub fn generate_hashtags(topic: &str, keywords: &[String], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    std::iter::once(pascal_case(topic))
        .chain(keywords.iter().map(|k| k.chars().filter(|c| c.is_alphanumeric()).collect::<String>()))
        .filter(|tag: &String| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .take(limit)
        .map(|tag| format!("#{tag}"))
        .collect()
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`
/// when there is room for it.
fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let cut: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", cut.trim_end())
}

/// Builds a short caption: leading sentences of `text`, then as many hashtags as fit.
///
/// When even the first sentence is too long it is cut and marked with `...`.
pub fn generate_caption(text: &str, hashtags: &[String], max_chars: usize) -> String {
    let mut caption = String::new();

    for sentence in sentences_with_terminators(text) {
        let separator = usize::from(!caption.is_empty());
        if caption.chars().count() + separator + sentence.chars().count() > max_chars {
            if caption.is_empty() {
                caption = truncate_with_ellipsis(sentence, max_chars);
            }
            break;
        }
        if separator == 1 {
            caption.push(' ');
        }
        caption.push_str(sentence);
    }

    for tag in hashtags {
        if caption.chars().count() + 1 + tag.chars().count() > max_chars {
            break;
        }
        if !caption.is_empty() {
            caption.push(' ');
        }
        caption.push_str(tag);
    }

    caption
}
