use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::metrics::{CHUNKS_FORWARDED, REQUEST_TOTAL, STREAMS_CANCELED, STREAM_FAILURES};
use crate::models::{GenerateOptions, GenerateRequest, TranslateRequest};
use crate::prompt::render_prompt;
use crate::state::AppState;

// Translation wants deterministic output, so temperature stays at zero.
const TEMPERATURE: f32 = 0.0;
const NUM_CTX: u32 = 4096;

type Frame = Result<Bytes, Infallible>;

// POST /api/translate: relay the backend's generation stream to the client
// as SSE, one data frame per chunk. Status and headers are committed before
// the backend call, so anything that goes wrong after that only shows up as
// an early end of stream.
pub async fn translate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    REQUEST_TOTAL.inc();

    // Readiness gate, re-checked per request so the service becomes usable
    // as soon as discovery publishes.
    let Some(model) = state.registry.get() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "model not ready yet, try again shortly",
        )
            .into_response();
    };
    let model = model.to_string();

    let Json(req) = match payload {
        Ok(p) => p,
        Err(_) => return (StatusCode::BAD_REQUEST, "invalid JSON body").into_response(),
    };

    let generate = GenerateRequest {
        model,
        prompt: render_prompt(&req),
        stream: true,
        options: GenerateOptions {
            temperature: TEMPERATURE,
            num_ctx: NUM_CTX,
        },
    };

    let (tx, rx) = mpsc::channel::<Frame>(16);
    tokio::spawn(relay_stream(Arc::clone(&state), generate, tx));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .header("X-Accel-Buffering", "no")
        .body(Body::from_stream(ReceiverStream::new(rx)))
        .unwrap()
}

// Pump backend chunks into the response channel. Each frame is its own Bytes
// chunk on the wire, so nothing downstream batches them. When the client goes
// away the receiver drops, the pump returns, and dropping the chunk stream
// aborts the backend call.
async fn relay_stream(
    state: Arc<AppState>,
    req: GenerateRequest,
    tx: mpsc::Sender<Frame>,
) {
    let mut chunks = match state.ollama.generate_stream(&req).await {
        Ok(s) => s,
        Err(err) => {
            STREAM_FAILURES.inc();
            tracing::error!(%err, "could not start generation");
            return;
        }
    };

    loop {
        tokio::select! {
            // Client disconnected: stop asking the backend for more work.
            _ = tx.closed() => {
                STREAMS_CANCELED.inc();
                tracing::info!("client canceled translation stream");
                return;
            }
            next = chunks.next() => match next {
                Some(Ok(chunk)) => {
                    if chunk.response.is_empty() {
                        continue;
                    }
                    let frame = Bytes::from(format!("data: {}\n\n", chunk.response));
                    if tx.send(Ok(frame)).await.is_err() {
                        STREAMS_CANCELED.inc();
                        tracing::info!("client canceled translation stream");
                        return;
                    }
                    CHUNKS_FORWARDED.inc();
                }
                Some(Err(err)) => {
                    // Headers are already on the wire; all we can do is stop
                    // and leave a record for operators.
                    STREAM_FAILURES.inc();
                    tracing::error!(%err, "generation failed mid-stream");
                    return;
                }
                None => {
                    tracing::debug!("translation stream complete");
                    return;
                }
            },
        }
    }
}
