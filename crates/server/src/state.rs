use std::sync::Arc;

use scribo_core::{ArticleGenerator, ArticleLibrary, GeneratorConfig, MemoryStore, MockContentService};

use crate::config::ServerConfig;

/// Shared handler state. Cloned per request; the library is shared.
#[derive(Clone)]
pub struct AppState {
    pub generator: ArticleGenerator,
    pub library: Arc<ArticleLibrary<MemoryStore>>,
    pub service: MockContentService,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let generator = GeneratorConfig { reflow: config.reflow, ..Default::default() };
        Self {
            generator: ArticleGenerator::with_config(generator),
            library: Arc::new(ArticleLibrary::new(MemoryStore::new())),
            service: MockContentService::new(config.mock_delay),
        }
    }
}
