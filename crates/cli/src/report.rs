//! Plain-text renderings of analysis results for stdout.

use scribo_core::{ReadabilityReport, SeoReport};

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
}

pub fn render_readability(report: &ReadabilityReport) -> String {
    format!(
        "{}{:<11} {:.1} ({})\n{:<11} {}\n{:<11} {}\n{:<11} {}\n",
        heading("Readability"),
        "Score:",
        report.score,
        report.band,
        "Words:",
        report.words,
        "Sentences:",
        report.sentences,
        "Syllables:",
        report.syllables,
    )
}

pub fn render_seo(report: &SeoReport) -> String {
    let mut out = heading("SEO");
    if !report.title.is_empty() {
        out.push_str(&format!("{:<13} {}\n", "Title:", report.title));
    }
    out.push_str(&format!("{:<13} {}\n", "Description:", report.description));
    out.push_str(&format!("{:<13} {}\n", "Keywords:", report.keywords.join(", ")));

    if !report.keyword_density.is_empty() {
        out.push_str(&format!("\n{:<20} {:>6} {:>8}\n", "Keyword", "Count", "Density"));
        for stat in &report.keyword_density {
            out.push_str(&format!("{:<20} {:>6} {:>7.1}%\n", stat.keyword, stat.count, stat.density));
        }
    }
    out
}

pub fn render_social(hashtags: &[String], caption: &str) -> String {
    format!(
        "{}{:<10} {}\n{:<10} {}\n",
        heading("Social"),
        "Hashtags:",
        hashtags.join(" "),
        "Caption:",
        caption
    )
}
