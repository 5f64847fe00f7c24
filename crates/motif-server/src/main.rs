//! Binary entrypoint for the motif HTTP server.
//!
//! Reads configuration from environment variables:
//! - `MOTIF_PORT`: Server listen port (default: "8000")

use motif_server::router::build_router;
use motif_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("MOTIF_PORT").unwrap_or_else(|_| "8000".to_string());

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("motif server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
