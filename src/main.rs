use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use translate_gateway::config::Args;
use translate_gateway::state::AppState;
use translate_gateway::{discovery, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = Arc::new(AppState::new(args.ollama_url.clone()));

    // Detect the model in the background; requests get 503 until it lands.
    tokio::spawn(discovery::detect_model(Arc::clone(&state)));

    let app = router(state);
    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("translation gateway running on http://localhost:{}", args.port);
    tracing::info!("forwarding to ollama at {}", args.ollama_url);
    axum::serve(listener, app).await.unwrap();
}
