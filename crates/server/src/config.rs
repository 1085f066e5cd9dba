//! Server settings read from `SCRIBO_*` environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use scribo_core::{ReflowConfig, ScriboError};

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`SCRIBO_ADDR`, default `127.0.0.1:3000`).
    pub addr: SocketAddr,
    /// Default word budget for `/api/generate` (`SCRIBO_MIN_WORDS`, `SCRIBO_MAX_WORDS`).
    pub reflow: ReflowConfig,
    /// Per-request timeout (`SCRIBO_REQUEST_TIMEOUT`, seconds, default 60).
    pub request_timeout: Duration,
    /// Simulated latency of the mock content service (`SCRIBO_MOCK_DELAY_MS`, default 500).
    pub mock_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            reflow: ReflowConfig::default(),
            request_timeout: Duration::from_secs(60),
            mock_delay: Duration::from_millis(500),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, ScriboError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ScriboError::ConfigError(format!("{name} has an invalid value: {value:?}"))),
        None => Ok(default),
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ScriboError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScriboError> {
        let defaults = Self::default();

        let config = Self {
            addr: parse_var("SCRIBO_ADDR", lookup("SCRIBO_ADDR"), defaults.addr)?,
            reflow: ReflowConfig {
                min_words: parse_var("SCRIBO_MIN_WORDS", lookup("SCRIBO_MIN_WORDS"), defaults.reflow.min_words)?,
                max_words: parse_var("SCRIBO_MAX_WORDS", lookup("SCRIBO_MAX_WORDS"), defaults.reflow.max_words)?,
            },
            request_timeout: Duration::from_secs(parse_var(
                "SCRIBO_REQUEST_TIMEOUT",
                lookup("SCRIBO_REQUEST_TIMEOUT"),
                defaults.request_timeout.as_secs(),
            )?),
            mock_delay: Duration::from_millis(parse_var(
                "SCRIBO_MOCK_DELAY_MS",
                lookup("SCRIBO_MOCK_DELAY_MS"),
                defaults.mock_delay.as_millis() as u64,
            )?),
        };

        config.reflow.validate()?;
        Ok(config)
    }
}
