use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use breakeven_core::payback::chart;
use breakeven_core::payback::engine::{self, CashFlowRow, PaybackInput};

use crate::input;

/// Arguments for payback analysis
#[derive(Args)]
pub struct PaybackArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a spreadsheet-style CSV dataset (Year, Cash Flow, Initial Investment)
    #[arg(long)]
    pub csv: Option<String>,

    /// Comma-separated yearly cash flows (e.g. "2000,3000,3500,4000")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<Decimal>>,

    /// Comma-separated year labels; defaults to 1..n
    #[arg(long, value_delimiter = ',')]
    pub years: Option<Vec<Decimal>>,

    /// Initial investment to recover (required with --cash-flows)
    #[arg(long)]
    pub investment: Option<Decimal>,
}

/// Arguments for chart data assembly
#[derive(Args)]
pub struct ChartArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a spreadsheet-style CSV dataset (Year, Cash Flow, Initial Investment)
    #[arg(long)]
    pub csv: Option<String>,

    /// Comma-separated yearly cash flows
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<Decimal>>,

    /// Comma-separated year labels; defaults to 1..n
    #[arg(long, value_delimiter = ',')]
    pub years: Option<Vec<Decimal>>,

    /// Initial investment to recover (required with --cash-flows)
    #[arg(long)]
    pub investment: Option<Decimal>,
}

fn input_from_flags(
    cash_flows: &[Decimal],
    years: &Option<Vec<Decimal>>,
    investment: Option<Decimal>,
) -> Result<PaybackInput, Box<dyn std::error::Error>> {
    let initial_investment = investment.ok_or("--investment is required with --cash-flows")?;

    let years: Vec<Decimal> = match years {
        Some(y) if y.len() == cash_flows.len() => y.clone(),
        Some(y) => {
            return Err(format!(
                "--years has {} entries but --cash-flows has {}",
                y.len(),
                cash_flows.len()
            )
            .into())
        }
        None => (1..=cash_flows.len() as u64).map(Decimal::from).collect(),
    };

    let rows = years
        .into_iter()
        .zip(cash_flows.iter())
        .map(|(year, &cash_flow)| CashFlowRow { year, cash_flow })
        .collect();

    Ok(PaybackInput {
        rows,
        initial_investment,
    })
}

fn resolve_payback_input(
    input_path: &Option<String>,
    csv_path: &Option<String>,
    cash_flows: &Option<Vec<Decimal>>,
    years: &Option<Vec<Decimal>>,
    investment: Option<Decimal>,
) -> Result<PaybackInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = input_path {
        Ok(input::file::read_json(path)?)
    } else if let Some(ref path) = csv_path {
        let dataset = input::csv_in::read_dataset(path)?;
        Ok(dataset.to_payback_input()?)
    } else if let Some(ref flows) = cash_flows {
        input_from_flags(flows, years, investment)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err("--input <file.json>, --csv <file.csv>, --cash-flows, or stdin required \
             for payback analysis"
            .into())
    }
}

pub fn run_payback(args: PaybackArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pb_input = resolve_payback_input(
        &args.input,
        &args.csv,
        &args.cash_flows,
        &args.years,
        args.investment,
    )?;
    let result = engine::compute_payback(&pb_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pb_input = resolve_payback_input(
        &args.input,
        &args.csv,
        &args.cash_flows,
        &args.years,
        args.investment,
    )?;
    let result = chart::build_payback_chart(&pb_input)?;
    Ok(serde_json::to_value(result)?)
}
