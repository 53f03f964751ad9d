use crate::catalog::{CatalogStore, ModelRecord};
use crate::pricing::units::{self, Unit};
use serde::{Deserialize, Serialize};

/// One usage scenario: input/output volume in a chosen unit, run for a
/// number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub input_qty: f64,
    pub output_qty: f64,
    pub unit: Unit,
    pub calls: u32,
}

impl Scenario {
    /// Build a scenario from raw user input, coercing malformed values
    /// (negative/NaN quantities become 0, call counts below 1 become 1).
    pub fn from_raw(input: f64, output: f64, unit: Unit, calls: i64) -> Self {
        Self {
            input_qty: units::sanitize_quantity(input),
            output_qty: units::sanitize_quantity(output),
            unit,
            calls: units::sanitize_call_count(calls),
        }
    }

    /// Input volume normalized to tokens.
    pub fn input_tokens(&self) -> f64 {
        units::convert_to_tokens(self.input_qty, self.unit)
    }

    /// Output volume normalized to tokens.
    pub fn output_tokens(&self) -> f64 {
        units::convert_to_tokens(self.output_qty, self.unit)
    }
}

/// Cost breakdown for one scenario against one model.
///
/// Full f64 precision; rounding for display (6 decimal places in the
/// reference UI) is a surface concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub per_call_cost: f64,
    pub total_cost: f64,
}

/// Compute the cost of running `scenario` against `model`.
///
/// Prices are per 1M tokens, so each component is `tokens / 1M * price`.
pub fn cost_for_model(model: &ModelRecord, scenario: &Scenario) -> CostBreakdown {
    let input_cost = (scenario.input_tokens() / 1_000_000.0) * model.input_price;
    let output_cost = (scenario.output_tokens() / 1_000_000.0) * model.output_price;
    let per_call_cost = input_cost + output_cost;

    CostBreakdown {
        input_cost,
        output_cost,
        per_call_cost,
        total_cost: per_call_cost * f64::from(scenario.calls),
    }
}

/// Compute the cost for an optional model selection.
///
/// Returns `None` when nothing is selected or the id matches no record -
/// distinct from a computed zero cost, which a free model legitimately
/// produces. Surfaces must preserve that distinction.
pub fn compute_cost(
    store: &CatalogStore,
    model_id: Option<&str>,
    scenario: &Scenario,
) -> Option<CostBreakdown> {
    let model = store.find_by_id(model_id?)?;
    Some(cost_for_model(model, scenario))
}
