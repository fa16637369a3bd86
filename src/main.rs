use std::env;
use std::sync::Arc;

use anyhow::Result;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use ad_image_studio::{
    api::{self, AppState},
    runware::RunwareClient,
    store::MemoryPromptStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let bind_address = format!("0.0.0.0:{}", port);

    let runware = RunwareClient::from_env()?;
    tracing::info!(api_key_configured = runware.has_api_key(), "runware client ready");

    let state = AppState::new(Arc::new(MemoryPromptStore::default()), runware);

    // Vite dev server and the local preview build.
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let router = axum::Router::new()
        .route("/", get(api::health))
        .route("/api/images/generate-batch", post(api::generate_batch))
        .route("/api/images/regenerate", post(api::regenerate))
        .route("/api/images/models", get(api::list_models))
        .layer(cors)
        .with_state(state);
    let tcp_listener = tokio::net::TcpListener::bind(&bind_address).await?;

    tracing::info!(%bind_address, "ad image studio server started");

    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(async { let _ = tokio::signal::ctrl_c().await; })
        .await?;
    Ok(())
}
