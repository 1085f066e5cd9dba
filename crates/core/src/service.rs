//! External content services: summarization and voice synthesis.
//!
//! The generation pipeline never calls these. They sit behind
//! [`ContentService`] so that the CLI and server can swap a real backend for
//! [`MockContentService`], which simulates latency and returns canned results.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tokenize::{count_words, sentences_with_terminators};
use crate::{Result, ScriboError};

/// Words per minute assumed for synthesized speech.
pub const SPEECH_WORDS_PER_MINUTE: f64 = 150.0;

/// Sentences kept by [`MockContentService::summarize`].
pub const SUMMARY_SENTENCES: usize = 3;

/// A synthesized audio asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioRef {
    /// Location of the audio file.
    pub url: String,
    /// Estimated playback length.
    pub duration_seconds: f64,
    /// Voice used for synthesis.
    pub voice: String,
}

/// Asynchronous summarization and text-to-speech.
pub trait ContentService: Send + Sync {
    /// Produces a short summary of `text`.
    fn summarize(&self, text: &str) -> impl Future<Output = Result<String>> + Send;

    /// Synthesizes `text` to speech.
    fn synthesize_voice(&self, text: &str) -> impl Future<Output = Result<AudioRef>> + Send;
}

/// Offline [`ContentService`] with a configurable artificial delay.
#[derive(Debug, Clone)]
pub struct MockContentService {
    pub delay: Duration,
    pub voice: String,
    pub sample_url: String,
}

impl Default for MockContentService {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            voice: "en-US-Standard-A".to_string(),
            sample_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string(),
        }
    }
}

impl MockContentService {
    pub fn new(delay: Duration) -> Self {
        Self { delay, ..Default::default() }
    }

    /// A mock that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Err(ScriboError::ServiceError("no text provided".to_string()))
    } else {
        Ok(())
    }
}

impl ContentService for MockContentService {
    async fn summarize(&self, text: &str) -> Result<String> {
        require_text(text)?;
        self.wait().await;

        let summary = sentences_with_terminators(text)
            .into_iter()
            .take(SUMMARY_SENTENCES)
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(chars = summary.len(), "mock summary ready");
        Ok(summary)
    }

    async fn synthesize_voice(&self, text: &str) -> Result<AudioRef> {
        require_text(text)?;
        self.wait().await;

        let seconds = count_words(text) as f64 / SPEECH_WORDS_PER_MINUTE * 60.0;
        Ok(AudioRef {
            url: self.sample_url.clone(),
            duration_seconds: (seconds * 10.0).round() / 10.0,
            voice: self.voice.clone(),
        })
    }
}
