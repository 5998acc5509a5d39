use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use toolshed_core::Registry;
use toolshed_server::app_state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("TOOLSHED_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("TOOLSHED_PORT").unwrap_or_else(|_| "3000".to_string());

    let registry =
        Registry::new(toolshed_tools::builtin()).expect("builtin tool names are unique");

    for definition in registry.definitions() {
        tracing::info!(tool = %definition.name, "registered");
    }

    let state = AppState {
        registry: Arc::new(registry),
    };

    let app = toolshed_server::router::create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Toolshed server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
