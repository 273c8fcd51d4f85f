use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payback
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_payback(input_json: String) -> NapiResult<String> {
    let input: breakeven_core::payback::engine::PaybackInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = breakeven_core::payback::engine::compute_payback(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_payback_chart(input_json: String) -> NapiResult<String> {
    let input: breakeven_core::payback::engine::PaybackInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        breakeven_core::payback::chart::build_payback_chart(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Unit economics
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_unit_breakeven(input_json: String) -> NapiResult<String> {
    let input: breakeven_core::unit_economics::breakeven::UnitEconomicsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = breakeven_core::unit_economics::breakeven::compute_unit_breakeven(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

#[napi]
pub fn template_dataset() -> NapiResult<String> {
    let template = breakeven_core::dataset::FinancialDataset::template();
    serde_json::to_string(&template).map_err(to_napi_error)
}

#[napi]
pub fn dataset_to_payback_input(dataset_json: String) -> NapiResult<String> {
    let dataset: breakeven_core::dataset::FinancialDataset =
        serde_json::from_str(&dataset_json).map_err(to_napi_error)?;
    let input = dataset.to_payback_input().map_err(to_napi_error)?;
    serde_json::to_string(&input).map_err(to_napi_error)
}
