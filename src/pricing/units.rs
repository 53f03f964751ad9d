//! Unit handling and numeric input coercion.
//!
//! Tokens are the engine's unit of account; word and character quantities
//! are normalized through the approximate ratios below before any cost
//! math happens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Approximate tokens per word. Varies by language and model; documented
/// as approximate wherever it is surfaced.
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Approximate characters per token.
pub const CHARS_PER_TOKEN: f64 = 4.0;

/// Unit a user-supplied quantity is expressed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Tokens,
    Words,
    Characters,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens => write!(f, "tokens"),
            Self::Words => write!(f, "words"),
            Self::Characters => write!(f, "characters"),
        }
    }
}

/// Convert a quantity in `unit` to a token count.
///
/// Pure conversion: negative input is not rejected here, callers coerce
/// user input through [`sanitize_quantity`] first.
pub fn convert_to_tokens(quantity: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Tokens => quantity,
        Unit::Words => quantity * TOKENS_PER_WORD,
        Unit::Characters => quantity / CHARS_PER_TOKEN,
    }
}

/// Coerce a raw quantity to something the engine accepts: NaN, infinite
/// and negative values all become 0.
pub fn sanitize_quantity(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Coerce a raw call count to a minimum of 1. A zero-call scenario is not
/// meaningful and must not read as a $0 total that looks like a free model.
pub fn sanitize_call_count(raw: i64) -> u32 {
    if raw < 1 {
        1
    } else {
        raw.min(i64::from(u32::MAX)) as u32
    }
}
