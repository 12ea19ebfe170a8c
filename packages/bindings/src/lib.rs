use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_core::amortization::input::LoanInput;
use mortgage_core::amortization::{analysis, labels, schedule};
use mortgage_core::presentation::{chart, table};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn read_loan(input_json: &str) -> NapiResult<LoanInput> {
    let input: LoanInput = serde_json::from_str(input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    Ok(input)
}

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// Parse the three raw form fields into a validated loan (as JSON).
#[napi]
pub fn parse_loan_input(
    principal: String,
    annual_rate_percent: String,
    term_years: String,
) -> NapiResult<String> {
    let input = LoanInput::parse(&principal, &annual_rate_percent, &term_years)
        .map_err(to_napi_error)?;
    serde_json::to_string(&input).map_err(to_napi_error)
}

#[napi]
pub fn reference_loan_input() -> NapiResult<String> {
    serde_json::to_string(&LoanInput::default()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_mortgage(input_json: String) -> NapiResult<String> {
    let input = read_loan(&input_json)?;
    let output = analysis::analyze_mortgage(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_schedule(input_json: String) -> NapiResult<String> {
    let input = read_loan(&input_json)?;
    let output = schedule::compute_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn format_period_label(month: u32) -> String {
    labels::format_period_label(month)
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

#[napi]
pub fn chart_data(input_json: String) -> NapiResult<String> {
    let input = read_loan(&input_json)?;
    let periods = schedule::compute_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&chart::build_chart_data(&periods)).map_err(to_napi_error)
}

#[napi]
pub fn amortization_table(input_json: String) -> NapiResult<String> {
    let input = read_loan(&input_json)?;
    let periods = schedule::compute_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&table::build_table(&periods, input.principal)).map_err(to_napi_error)
}
