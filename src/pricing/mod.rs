pub mod calculator;
pub mod ranking;
pub mod units;

pub use calculator::{compute_cost, cost_for_model, CostBreakdown, Scenario};
pub use ranking::{chart_value, rank_all_by_cost, RankedCost, LOG_CHART_FLOOR};
pub use units::{convert_to_tokens, Unit, CHARS_PER_TOKEN, TOKENS_PER_WORD};
