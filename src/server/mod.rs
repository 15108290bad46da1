use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod routes;

/// Server state
pub struct AppState {
    /// Split threshold applied when a request does not specify one
    pub max_chars: usize,
}

pub async fn start_server(port: u16, max_chars: usize) -> anyhow::Result<()> {
    let state = Arc::new(AppState { max_chars });

    let app = Router::new()
        .route("/health", get(routes::handle_health))
        .route("/parse", post(routes::handle_parse))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting AST chunk service on {}", addr);
    println!("🌍 AST chunk service running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
