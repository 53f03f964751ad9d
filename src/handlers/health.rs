use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::AppState;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "llm-pricing",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Readiness check endpoint
/// Ready means the catalog loaded with at least one usable record.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.store.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "llm-pricing",
                "models": 0,
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "service": "llm-pricing",
            "models": state.store.len(),
            "catalog_warnings": state.store.warnings().len(),
        })),
    )
}
