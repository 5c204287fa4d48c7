use crate::ollama::OllamaClient;
use crate::registry::ModelRegistry;

// App's shared state
pub struct AppState {
    pub ollama: OllamaClient,
    pub registry: ModelRegistry,
}

impl AppState {
    pub fn new(ollama_url: impl Into<String>) -> Self {
        Self {
            ollama: OllamaClient::new(ollama_url),
            registry: ModelRegistry::new(),
        }
    }
}
