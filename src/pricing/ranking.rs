use crate::catalog::CatalogStore;
use crate::pricing::calculator::{cost_for_model, Scenario};
use serde::{Deserialize, Serialize};

/// Floor applied by [`chart_value`] so zero costs stay renderable on a
/// logarithmic axis.
pub const LOG_CHART_FLOOR: f64 = 1e-6;

/// One entry of a cost comparison: enough for a table row or a chart bar,
/// decoupled from any rendering technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCost {
    pub model_id: String,
    pub name: String,
    pub provider_name: String,
    pub cost: f64,
    pub is_selected: bool,
}

/// Rank every catalog record by the cost of running `scenario` against it,
/// ascending.
///
/// The sort is stable and keys on cost alone, so ties keep the catalog's
/// declaration order - that is the documented tie-break.
pub fn rank_all_by_cost(
    store: &CatalogStore,
    scenario: &Scenario,
    selected: Option<&str>,
) -> Vec<RankedCost> {
    let mut ranked: Vec<RankedCost> = store
        .all()
        .iter()
        .map(|model| RankedCost {
            model_id: model.id.clone(),
            name: model.name.clone(),
            provider_name: model.provider.name.clone(),
            cost: cost_for_model(model, scenario).total_cost,
            is_selected: selected == Some(model.id.as_str()),
        })
        .collect();

    ranked.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    ranked
}

/// Log-axis accommodation for chart rendering: costs below
/// [`LOG_CHART_FLOOR`] (notably exact zero) are floored to it so a
/// logarithmic scale can still place the point. This is deliberately a
/// named transform rather than something buried in formatting code.
pub fn chart_value(cost: f64) -> f64 {
    if cost < LOG_CHART_FLOOR {
        LOG_CHART_FLOOR
    } else {
        cost
    }
}
