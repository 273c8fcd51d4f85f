use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use breakeven_core::unit_economics::breakeven::{self, UnitEconomicsInput};

use crate::input;

/// Arguments for unit-economics break-even
#[derive(Args)]
pub struct UnitBreakevenArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Total fixed costs
    #[arg(long)]
    pub fixed_costs: Option<Decimal>,

    /// Selling price per unit
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Variable cost per unit
    #[arg(long)]
    pub variable_cost: Option<Decimal>,
}

pub fn run_unit_breakeven(args: UnitBreakevenArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ue_input: UnitEconomicsInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(fixed_costs), Some(price), Some(variable_cost)) =
        (args.fixed_costs, args.price, args.variable_cost)
    {
        UnitEconomicsInput {
            fixed_costs,
            price_per_unit: price,
            variable_cost_per_unit: variable_cost,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json>, all of --fixed-costs/--price/--variable-cost, \
                    or stdin required for unit break-even"
            .into());
    };
    let result = breakeven::compute_unit_breakeven(&ue_input)?;
    Ok(serde_json::to_value(result)?)
}
