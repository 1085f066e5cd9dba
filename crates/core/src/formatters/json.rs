use crate::Result;
use serde::Serialize;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serialize any report or article to a JSON string
pub fn convert_to_json<T: Serialize + ?Sized>(value: &T, config: &JsonConfig) -> Result<String> {
    if config.pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        convert_to_json(value, &self.config)
    }
}
