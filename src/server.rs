use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{catalog::CatalogStore, config::Config, handlers, handlers::AppState};

/// Start the pricing API server
///
/// This function:
/// 1. Initializes tracing with the configured level/format
/// 2. Wraps the loaded catalog in shared state
/// 3. Builds the Axum application
/// 4. Serves requests with graceful shutdown on ctrl-c
pub async fn start_server(config: Config, store: CatalogStore) -> Result<()> {
    crate::init_tracing_with(&config.server);
    info!("LLM Pricing API starting...");

    for warning in store.warnings() {
        tracing::warn!("catalog: {}", warning);
    }
    info!(
        models = store.len(),
        warnings = store.warnings().len(),
        "Catalog ready"
    );

    let app_state = AppState {
        store: Arc::new(store),
    };

    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting LLM Pricing API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/v1/models", get(handlers::models::list_models))
        .route("/v1/models/:id", get(handlers::models::get_model))
        .route("/v1/estimate", post(handlers::pricing_api::estimate))
        .route("/v1/compare", post(handlers::pricing_api::compare))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        // Requests are small JSON scenarios; anything bigger is abuse.
        .layer(DefaultBodyLimit::max(64 * 1024))
        // The browser frontend is served from elsewhere.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, draining connections...");
}
