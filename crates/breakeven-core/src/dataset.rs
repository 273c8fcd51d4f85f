use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::BreakevenError;
use crate::payback::engine::{CashFlowRow, PaybackInput};
use crate::types::{Money, Years};
use crate::BreakevenResult;

/// Column headers of the spreadsheet-style dataset. Exact strings are a
/// compatibility surface: template files written with these headers must
/// keep loading.
pub const YEAR_HEADER: &str = "Year";
pub const CASH_FLOW_HEADER: &str = "Cash Flow";
pub const INITIAL_INVESTMENT_HEADER: &str = "Initial Investment";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the tabular dataset. The investment column is only populated
/// in the first row; it is a scalar shoehorned into the table for file
/// compatibility, not a per-row value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Year")]
    pub year: Years,
    #[serde(rename = "Cash Flow")]
    pub cash_flow: Money,
    #[serde(rename = "Initial Investment")]
    pub initial_investment: Option<Money>,
}

/// A spreadsheet-style financial dataset as uploaded or generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialDataset {
    pub rows: Vec<DatasetRow>,
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

impl FinancialDataset {
    /// The canonical downloadable template: four example years of cash
    /// flows with the investment in the first row's slot.
    pub fn template() -> Self {
        FinancialDataset {
            rows: vec![
                DatasetRow {
                    year: dec!(1),
                    cash_flow: dec!(2000),
                    initial_investment: Some(dec!(10000)),
                },
                DatasetRow {
                    year: dec!(2),
                    cash_flow: dec!(3000),
                    initial_investment: None,
                },
                DatasetRow {
                    year: dec!(3),
                    cash_flow: dec!(3500),
                    initial_investment: None,
                },
                DatasetRow {
                    year: dec!(4),
                    cash_flow: dec!(4000),
                    initial_investment: None,
                },
            ],
        }
    }

    /// Convert the tabular form into engine input. The investment is read
    /// from the first row only; investment cells in any other row are
    /// ignored. This positional convention matches the template layout.
    pub fn to_payback_input(&self) -> BreakevenResult<PaybackInput> {
        let first = self.rows.first().ok_or_else(|| {
            BreakevenError::InsufficientData("Dataset has no rows".to_string())
        })?;

        let initial_investment = first.initial_investment.ok_or_else(|| {
            BreakevenError::InvalidInput {
                field: "initial_investment".to_string(),
                reason: "First row must carry the initial investment".to_string(),
            }
        })?;

        let rows = self
            .rows
            .iter()
            .map(|r| CashFlowRow {
                year: r.year,
                cash_flow: r.cash_flow,
            })
            .collect();

        Ok(PaybackInput {
            rows,
            initial_investment,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
