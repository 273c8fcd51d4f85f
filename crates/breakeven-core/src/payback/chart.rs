use serde::{Deserialize, Serialize};

use crate::payback::engine::{self, BreakEven, PaybackInput};
use crate::types::{ComputationOutput, Money, Years};
use crate::BreakevenResult;

/// Chart title expected by downstream renderers
pub const CHART_TITLE: &str = "Investment Payback Period";
/// X-axis label
pub const X_AXIS_LABEL: &str = "Year";
/// Y-axis label and series legend entry
pub const Y_AXIS_LABEL: &str = "Cumulative Cash Flow";
/// Legend entry for the horizontal investment reference line
pub const REFERENCE_LABEL: &str = "Initial Investment";

/// Fixed metric text when no crossing exists
pub const NO_BREAK_EVEN_MESSAGE: &str = "No break-even within the given years";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything an external line-chart renderer needs: the cumulative series
/// against its years, a horizontal reference line at the investment level,
/// and the fixed labels. The renderer itself lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaybackChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the cumulative cash flow series
    pub series_label: String,
    /// Legend entry for the investment reference line
    pub reference_label: String,
    /// X values, one per input row
    pub years: Vec<Years>,
    /// Y values, index-aligned with `years`
    pub cumulative_cash_flow: Vec<Money>,
    /// Level of the horizontal reference line
    pub initial_investment: Money,
    /// Metric text for the break-even display
    pub break_even_display: String,
    pub break_even: BreakEven,
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

/// Metric-display text for a break-even result: "Year {value}" when found,
/// a fixed message otherwise.
pub fn break_even_label(break_even: &BreakEven) -> String {
    match break_even {
        BreakEven::Found { year } => format!("Year {year}"),
        BreakEven::NotFound => NO_BREAK_EVEN_MESSAGE.to_string(),
    }
}

/// Run the payback engine and assemble the chart value object from its
/// output. Warnings and metadata carry through from the engine run.
pub fn build_payback_chart(
    input: &PaybackInput,
) -> BreakevenResult<ComputationOutput<PaybackChart>> {
    let computed = engine::compute_payback(input)?;

    let chart = PaybackChart {
        title: CHART_TITLE.to_string(),
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        series_label: Y_AXIS_LABEL.to_string(),
        reference_label: REFERENCE_LABEL.to_string(),
        years: input.rows.iter().map(|r| r.year).collect(),
        cumulative_cash_flow: computed.result.cumulative_series.clone(),
        initial_investment: input.initial_investment,
        break_even_display: break_even_label(&computed.result.break_even),
        break_even: computed.result.break_even,
    };

    Ok(ComputationOutput {
        result: chart,
        methodology: computed.methodology,
        assumptions: computed.assumptions,
        warnings: computed.warnings,
        metadata: computed.metadata,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payback::engine::CashFlowRow;
    use rust_decimal_macros::dec;

    fn basic_input() -> PaybackInput {
        PaybackInput {
            rows: vec![
                CashFlowRow {
                    year: dec!(1),
                    cash_flow: dec!(2000),
                },
                CashFlowRow {
                    year: dec!(2),
                    cash_flow: dec!(3000),
                },
                CashFlowRow {
                    year: dec!(3),
                    cash_flow: dec!(3500),
                },
                CashFlowRow {
                    year: dec!(4),
                    cash_flow: dec!(4000),
                },
            ],
            initial_investment: dec!(10000),
        }
    }

    #[test]
    fn test_chart_axes_and_series() {
        let result = build_payback_chart(&basic_input()).unwrap();
        let chart = &result.result;
        assert_eq!(chart.title, "Investment Payback Period");
        assert_eq!(chart.x_label, "Year");
        assert_eq!(chart.y_label, "Cumulative Cash Flow");
        assert_eq!(chart.years, vec![dec!(1), dec!(2), dec!(3), dec!(4)]);
        assert_eq!(
            chart.cumulative_cash_flow,
            vec![dec!(2000), dec!(5000), dec!(8500), dec!(12500)]
        );
        assert_eq!(chart.initial_investment, dec!(10000));
    }

    #[test]
    fn test_metric_label_found() {
        let label = break_even_label(&BreakEven::Found { year: dec!(3.375) });
        assert_eq!(label, "Year 3.375");
    }

    #[test]
    fn test_metric_label_not_found() {
        let label = break_even_label(&BreakEven::NotFound);
        assert_eq!(label, "No break-even within the given years");
    }

    #[test]
    fn test_chart_carries_break_even_display() {
        let result = build_payback_chart(&basic_input()).unwrap();
        assert_eq!(result.result.break_even_display, "Year 3.375");
    }
}
