use std::sync::Arc;
use std::time::Duration;

use crate::state::AppState;

// Models whose name contains this marker can serve translation requests.
pub const MODEL_MARKER: &str = "translategemma";
// Used when no matching model shows up within the retry budget.
pub const FALLBACK_MODEL: &str = "translategemma:4b";

const MAX_ATTEMPTS: u32 = 10;
const RETRY_DELAY: Duration = Duration::from_secs(2);

// Background task: poll the model listing until a translategemma model shows
// up, then publish its exact name. Listing failures just burn an attempt;
// nothing here ever reaches a caller.
pub async fn detect_model(state: Arc<AppState>) {
    detect_model_with(state, MAX_ATTEMPTS, RETRY_DELAY).await
}

async fn detect_model_with(state: Arc<AppState>, max_attempts: u32, delay: Duration) {
    tracing::info!("looking for a local {MODEL_MARKER} model");

    for attempt in 1..=max_attempts {
        match state.ollama.list_models().await {
            Ok(models) => {
                if let Some(m) = models.iter().find(|m| m.name.contains(MODEL_MARKER)) {
                    tracing::info!(model = %m.name, "model detected");
                    state.registry.publish(m.name.clone());
                    return;
                }
                tracing::debug!(attempt, "no matching model yet");
            }
            Err(err) => {
                tracing::debug!(attempt, %err, "model listing failed");
            }
        }
        tokio::time::sleep(delay).await;
    }

    tracing::warn!("no {MODEL_MARKER} model found, falling back to {FALLBACK_MODEL}");
    state.registry.publish(FALLBACK_MODEL.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tags_body(names: &[&str]) -> serde_json::Value {
        let models: Vec<_> = names
            .iter()
            .map(|n| serde_json::json!({"name": n}))
            .collect();
        serde_json::json!({ "models": models })
    }

    #[tokio::test]
    async fn publishes_first_matching_model_and_stops() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(tags_body(&["llama3.2:3b", "translategemma:12b"])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let state = Arc::new(AppState::new(server.uri()));
        detect_model_with(Arc::clone(&state), 10, Duration::from_millis(1)).await;

        assert_eq!(state.registry.get(), Some("translategemma:12b"));
    }

    #[tokio::test]
    async fn exhausts_attempts_then_publishes_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tags_body(&["mistral"])))
            .expect(4)
            .mount(&server)
            .await;

        let state = Arc::new(AppState::new(server.uri()));
        detect_model_with(Arc::clone(&state), 4, Duration::from_millis(1)).await;

        assert_eq!(state.registry.get(), Some(FALLBACK_MODEL));
    }

    #[tokio::test]
    async fn listing_errors_count_as_attempts_and_degrade_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let state = Arc::new(AppState::new(server.uri()));
        detect_model_with(Arc::clone(&state), 3, Duration::from_millis(1)).await;

        assert_eq!(state.registry.get(), Some(FALLBACK_MODEL));
    }
}
