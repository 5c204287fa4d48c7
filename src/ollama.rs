use bytes::BytesMut;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::models::{GenerateChunk, GenerateRequest, ModelList, ModelTag};

#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("request to ollama failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ollama returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("backend reported: {0}")]
    Backend(String),
}

// Thin client over the Ollama HTTP API
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    // List the models the local instance has pulled.
    pub async fn list_models(&self) -> Result<Vec<ModelTag>, OllamaError> {
        let resp = self
            .http
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(OllamaError::Status(resp.status()));
        }
        let list = resp.json::<ModelList>().await?;
        Ok(list.models)
    }

    // Start a streaming generation. The stream yields one chunk per NDJSON
    // line and ends on `done`, an error line, or a transport error. Dropping
    // it drops the HTTP response and aborts the call backend-side.
    pub async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> Result<BoxStream<'static, Result<GenerateChunk, OllamaError>>, OllamaError> {
        let resp = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(OllamaError::Status(resp.status()));
        }

        let mut body = resp.bytes_stream();
        let s = async_stream::stream! {
            let mut buf = BytesMut::new();
            while let Some(chunk) = body.next().await {
                let bytes = match chunk {
                    Ok(b) => b,
                    Err(e) => {
                        yield Err(OllamaError::Http(e));
                        return;
                    }
                };
                buf.extend_from_slice(&bytes);
                while let Some(pos) = buf.iter().position(|b| *b == b'\n') {
                    let line = buf.split_to(pos + 1);
                    let Ok(text) = std::str::from_utf8(&line) else {
                        continue;
                    };
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<GenerateChunk>(text) {
                        Ok(chunk) => {
                            if let Some(msg) = chunk.error {
                                yield Err(OllamaError::Backend(msg));
                                return;
                            }
                            let done = chunk.done;
                            yield Ok(chunk);
                            if done {
                                return;
                            }
                        }
                        // Unparseable line: skip it rather than kill the stream.
                        Err(err) => tracing::debug!(%err, "skipping malformed stream line"),
                    }
                }
            }
        };

        Ok(Box::pin(s))
    }
}
