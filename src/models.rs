use serde::{Deserialize, Serialize};

// Incoming translation request body. Absent fields become empty strings and
// flow into the prompt as-is.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct TranslateRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub text: String,
}

// Ollama /api/generate request format
#[derive(Serialize, Clone, Debug)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_ctx: u32,
}

// One NDJSON line of the generate stream
#[derive(Deserialize, Clone, Debug)]
pub struct GenerateChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}

// Entry in the /api/tags model listing
#[derive(Deserialize, Clone, Debug)]
pub struct ModelTag {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}
