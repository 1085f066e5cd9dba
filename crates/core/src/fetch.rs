//! Source content fetching from the encyclopedia API, files, and stdin.
//!
//! Online sources come from a MediaWiki `api.php` endpoint: an `opensearch`
//! query finds related page titles, then `prop=extracts` returns each page as
//! plain text. Extracts are concatenated with blank lines so that the
//! pipeline sees one paragraph per line.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{Result, ScriboError};

/// HTTP client configuration for fetching source content.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// MediaWiki `api.php` endpoint.
    pub api_base: String,
    /// Maximum number of pages to combine for one topic.
    pub max_sources: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Scribo/1.0)".to_string(),
            api_base: "https://en.wikipedia.org/w/api.php".to_string(),
            max_sources: 3,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
}

fn api_url(config: &FetchConfig, params: &[(&str, &str)]) -> Result<Url> {
    let base = Url::parse(&config.api_base).map_err(|e| ScriboError::InvalidUrl(e.to_string()))?;
    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ScriboError::InvalidUrl(format!(
            "URL must use http:// or https://: {}",
            config.api_base
        )));
    }
    Url::parse_with_params(base.as_str(), params).map_err(|e| ScriboError::InvalidUrl(e.to_string()))
}

async fn get_text(url: Url, config: &FetchConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ScriboError::HttpError)?;

    tracing::debug!(%url, "requesting source API");

    let response = client
        .get(url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScriboError::Timeout { timeout: config.timeout }
            } else {
                ScriboError::HttpError(e)
            }
        })?
        .error_for_status()?;

    Ok(response.text().await?)
}

/// Drops section heading lines (`== History ==`) and blank lines from an extract.
pub fn clean_extract(extract: &str) -> String {
    extract
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(line.starts_with("==") && line.ends_with("==")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads titles from an `opensearch` response: `[query, [titles], [descriptions], [urls]]`.
fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(value
        .get(1)
        .and_then(|titles| titles.as_array())
        .map(|titles| titles.iter().filter_map(|t| t.as_str().map(str::to_string)).collect())
        .unwrap_or_default())
}

/// Reads the first non-empty extract from a `prop=extracts` response.
fn parse_extract_response(body: &str) -> Result<Option<String>> {
    let response: QueryResponse = serde_json::from_str(body)?;
    Ok(response
        .query
        .into_iter()
        .flat_map(|q| q.pages)
        .filter(|page| !page.missing)
        .filter_map(|page| page.extract)
        .map(|extract| clean_extract(&extract))
        .find(|extract| !extract.is_empty()))
}

/// Searches for page titles related to `topic`, at most `config.max_sources`.
pub async fn search_titles(topic: &str, config: &FetchConfig) -> Result<Vec<String>> {
    let limit = config.max_sources.to_string();
    let url = api_url(
        config,
        &[
            ("action", "opensearch"),
            ("search", topic),
            ("limit", &limit),
            ("namespace", "0"),
            ("format", "json"),
        ],
    )?;

    let body = get_text(url, config).await?;
    let mut titles = parse_search_response(&body)?;
    titles.truncate(config.max_sources);
    Ok(titles)
}

/// Fetches the plain-text extract of the page titled `title`.
///
/// Returns [`ScriboError::TopicNotFound`] when the page is missing or empty.
pub async fn fetch_extract(title: &str, config: &FetchConfig) -> Result<String> {
    let url = api_url(
        config,
        &[
            ("action", "query"),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("format", "json"),
            ("formatversion", "2"),
            ("titles", title),
        ],
    )?;

    let body = get_text(url, config).await?;
    parse_extract_response(&body)?.ok_or_else(|| ScriboError::TopicNotFound(title.to_string()))
}

/// Fetches and concatenates extracts for the pages related to `topic`.
///
/// Pages without content are skipped. Transport errors abort the whole fetch.
#[tracing::instrument(skip(config), fields(max_sources = config.max_sources))]
pub async fn fetch_sources(topic: &str, config: &FetchConfig) -> Result<String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ScriboError::TopicNotFound(String::new()));
    }

    let mut titles = search_titles(topic, config).await?;
    if titles.is_empty() {
        titles.push(topic.to_string());
    }

    let mut parts = Vec::with_capacity(titles.len());
    for title in &titles {
        match fetch_extract(title, config).await {
            Ok(extract) => parts.push(extract),
            Err(ScriboError::TopicNotFound(missing)) => {
                tracing::warn!(title = %missing, "source page has no extract, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    if parts.is_empty() {
        return Err(ScriboError::TopicNotFound(topic.to_string()));
    }

    tracing::info!(pages = parts.len(), "fetched source content");
    Ok(parts.join("\n\n"))
}

/// Reads source text from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ScriboError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(ScriboError::from)
    }
}

/// Reads source text from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(ScriboError::from)?;

    Ok(buffer)
}
