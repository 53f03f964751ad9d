use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::ModelRecord;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::search;

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    /// Free-text filter matched against model and provider names.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<ModelRecord>,
}

/// Handle GET /v1/models
/// Returns the catalog, optionally filtered by the `q` query parameter.
/// Zero matches is a valid response, not an error.
pub async fn list_models(
    State(state): State<AppState>,
    Query(params): Query<ModelsQuery>,
) -> impl IntoResponse {
    let records: Vec<ModelRecord> = match params.q.as_deref() {
        Some(query) => search::filter_by_query(state.store.all(), query)
            .into_iter()
            .cloned()
            .collect(),
        None => state.store.all().to_vec(),
    };

    Json(ModelsResponse {
        object: "list".to_string(),
        data: records,
    })
}

/// Handle GET /v1/models/{id}
pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelRecord>, AppError> {
    state
        .store
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ModelNotFound(id))
}
