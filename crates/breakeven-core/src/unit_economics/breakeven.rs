use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BreakevenError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::BreakevenResult;

/// Message shown when no finite positive break-even volume exists
pub const INVALID_MARGIN_MESSAGE: &str = "price must exceed variable cost";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for classic unit-economics break-even.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitEconomicsInput {
    /// Total fixed costs
    pub fixed_costs: Money,
    /// Selling price per unit
    pub price_per_unit: Money,
    /// Variable cost per unit
    pub variable_cost_per_unit: Money,
}

/// Unit break-even point, or the validation message when the contribution
/// margin is zero or negative. The latter is a user-visible result, not a
/// fault: the computation is skipped, never partially executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnitBreakeven {
    Found {
        /// Fixed costs / contribution margin. Unrounded; formatting is a
        /// presentation concern.
        units: Decimal,
        /// units * price
        revenue: Money,
        /// price - variable cost per unit
        contribution_margin: Money,
    },
    Invalid {
        message: String,
    },
}

// ---------------------------------------------------------------------------
// compute_unit_breakeven
// ---------------------------------------------------------------------------

/// Compute the break-even quantity and revenue from fixed costs, unit
/// price, and unit variable cost.
pub fn compute_unit_breakeven(
    input: &UnitEconomicsInput,
) -> BreakevenResult<ComputationOutput<UnitBreakeven>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate inputs ---
    if input.fixed_costs < dec!(0) {
        return Err(BreakevenError::InvalidInput {
            field: "fixed_costs".to_string(),
            reason: "Fixed costs cannot be negative".to_string(),
        });
    }

    if input.price_per_unit < dec!(0) {
        return Err(BreakevenError::InvalidInput {
            field: "price_per_unit".to_string(),
            reason: "Price per unit cannot be negative".to_string(),
        });
    }

    if input.variable_cost_per_unit < dec!(0) {
        return Err(BreakevenError::InvalidInput {
            field: "variable_cost_per_unit".to_string(),
            reason: "Variable cost per unit cannot be negative".to_string(),
        });
    }

    let contribution_margin = input.price_per_unit - input.variable_cost_per_unit;

    let result = if contribution_margin > dec!(0) {
        let units = input.fixed_costs / contribution_margin;
        let revenue = units * input.price_per_unit;
        UnitBreakeven::Found {
            units,
            revenue,
            contribution_margin,
        }
    } else {
        warnings.push(format!(
            "Contribution margin is {contribution_margin}; no finite positive break-even volume exists"
        ));
        UnitBreakeven::Invalid {
            message: INVALID_MARGIN_MESSAGE.to_string(),
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Unit Economics Break-even (Contribution Margin)",
        &serde_json::json!({
            "fixed_costs": input.fixed_costs.to_string(),
            "price_per_unit": input.price_per_unit.to_string(),
            "variable_cost_per_unit": input.variable_cost_per_unit.to_string(),
        }),
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
