//! Request handlers for the JSON API.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use scribo_core::{
    ArticleGenerator, AudioRef, ContentService, GeneratedArticle, ReadabilityReport, SeoReport, analyze_readability,
    extract_seo, generate_caption, generate_hashtags,
};
use scribo_core::social::{DEFAULT_CAPTION_CHARS, DEFAULT_HASHTAG_LIMIT};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_string(), version: env!("CARGO_PKG_VERSION").to_string() })
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

pub async fn analyze(Json(req): Json<TextRequest>) -> Json<ReadabilityReport> {
    Json(analyze_readability(&req.text))
}

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub text: String,
    #[serde(default)]
    pub title: String,
}

pub async fn seo(Json(req): Json<SeoRequest>) -> Json<SeoReport> {
    Json(extract_seo("", &req.text, &req.title))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    /// Source text; fetched from the encyclopedia when absent.
    pub text: Option<String>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
}

pub async fn generate(State(state): State<AppState>, Json(req): Json<GenerateRequest>) -> ApiResult<GeneratedArticle> {
    if req.topic.trim().is_empty() {
        return Err(ApiError::BadRequest("topic must not be empty".to_string()));
    }

    let mut config = state.generator.config().clone();
    if let Some(min) = req.min_words {
        config.reflow.min_words = min;
    }
    if let Some(max) = req.max_words {
        config.reflow.max_words = max;
    }
    let generator = ArticleGenerator::with_config(config);

    let article = match req.text {
        Some(text) => generator.generate(&req.topic, &text)?,
        None => generator.fetch_and_generate(&req.topic).await?,
    };
    Ok(Json(article))
}

#[derive(Debug, Deserialize)]
pub struct SocialRequest {
    pub text: String,
    pub topic: String,
    pub limit: Option<usize>,
    pub max_chars: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SocialResponse {
    pub hashtags: Vec<String>,
    pub caption: String,
}

pub async fn social(Json(req): Json<SocialRequest>) -> Json<SocialResponse> {
    let keywords = extract_seo("", &req.text, &req.topic).keywords;
    let hashtags = generate_hashtags(&req.topic, &keywords, req.limit.unwrap_or(DEFAULT_HASHTAG_LIMIT));
    let caption = generate_caption(&req.text, &hashtags, req.max_chars.unwrap_or(DEFAULT_CAPTION_CHARS));
    Json(SocialResponse { hashtags, caption })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub async fn summarize(State(state): State<AppState>, Json(req): Json<TextRequest>) -> ApiResult<SummaryResponse> {
    let summary = state.service.summarize(&req.text).await?;
    Ok(Json(SummaryResponse { summary }))
}

pub async fn voice(State(state): State<AppState>, Json(req): Json<TextRequest>) -> ApiResult<AudioRef> {
    Ok(Json(state.service.synthesize_voice(&req.text).await?))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleList {
    pub articles: Vec<String>,
}

pub async fn list_articles(State(state): State<AppState>) -> ApiResult<ArticleList> {
    Ok(Json(ArticleList { articles: state.library.list()? }))
}

pub async fn get_article(State(state): State<AppState>, Path(key): Path<String>) -> ApiResult<GeneratedArticle> {
    state
        .library
        .load(&key)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no saved article named {key:?}")))
}

pub async fn put_article(
    State(state): State<AppState>, Path(key): Path<String>, Json(article): Json<GeneratedArticle>,
) -> Result<StatusCode, ApiError> {
    state.library.save(&key, &article)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_article(State(state): State<AppState>, Path(key): Path<String>) -> Result<StatusCode, ApiError> {
    if state.library.delete(&key)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("no saved article named {key:?}")))
    }
}
