use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::AppState;
use crate::pricing::{
    chart_value, cost_for_model, rank_all_by_cost, CostBreakdown, RankedCost, Scenario, Unit,
};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Model id to price. Absent means "nothing selected" - a valid state
    /// that yields a null breakdown, not an error.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub input: f64,
    #[serde(default)]
    pub output: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default = "default_calls")]
    pub calls: i64,
}

fn default_calls() -> i64 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub model: Option<String>,
    /// Scenario as actually priced, after numeric coercion.
    pub scenario: Scenario,
    pub input_tokens: f64,
    pub output_tokens: f64,
    /// Null when no model is selected - distinct from a zero-cost
    /// breakdown, which a free model produces.
    pub breakdown: Option<CostBreakdown>,
}

/// Handle POST /v1/estimate
/// Prices one scenario against one (optional) model.
pub async fn estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let scenario = Scenario::from_raw(req.input, req.output, req.unit, req.calls);

    let breakdown = match req.model.as_deref() {
        Some(id) => {
            let model = state
                .store
                .find_by_id(id)
                .ok_or_else(|| AppError::ModelNotFound(id.to_string()))?;
            Some(cost_for_model(model, &scenario))
        }
        None => None,
    };

    Ok(Json(EstimateResponse {
        model: req.model,
        input_tokens: scenario.input_tokens(),
        output_tokens: scenario.output_tokens(),
        scenario,
        breakdown,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub input: f64,
    #[serde(default)]
    pub output: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default = "default_calls")]
    pub calls: i64,
    /// Model id to mark as selected in the ranking.
    #[serde(default)]
    pub selected: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareEntry {
    #[serde(flatten)]
    pub ranked: RankedCost,
    /// Cost with the log-axis floor applied, for chart rendering.
    pub chart_value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub scenario: Scenario,
    pub data: Vec<CompareEntry>,
}

/// Handle POST /v1/compare
/// Ranks the whole catalog by scenario cost, cheapest first.
pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Json<CompareResponse> {
    let scenario = Scenario::from_raw(req.input, req.output, req.unit, req.calls);

    let data = rank_all_by_cost(&state.store, &scenario, req.selected.as_deref())
        .into_iter()
        .map(|ranked| CompareEntry {
            chart_value: chart_value(ranked.cost),
            ranked,
        })
        .collect();

    Json(CompareResponse { scenario, data })
}
