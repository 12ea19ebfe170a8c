use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::input::LoanInput;
use super::schedule::{compute_schedule, Schedule};
use super::totals::{compute_running_totals, summarize, RunningTotal, ScheduleSummary};
use crate::types::*;
use crate::MortgageResult;

/// Everything a renderer needs for one calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageAnalysis {
    pub summary: ScheduleSummary,
    pub schedule: Schedule,
    pub running_totals: Vec<RunningTotal>,
}

/// Validate, amortize and total a loan in one call.
pub fn analyze_mortgage(input: &LoanInput) -> MortgageResult<ComputationOutput<MortgageAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = compute_schedule(input)?;
    let summary = summarize(input, &schedule)?;
    let running_totals = compute_running_totals(&schedule, input.principal);

    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: principal repaid in equal installments".into());
    }
    if let Some(first) = schedule.iter().find(|p| p.principal < Decimal::ZERO) {
        warnings.push(format!(
            "Month {}: payment does not cover interest; balance grows",
            first.month
        ));
    }

    let output = MortgageAnalysis {
        summary,
        schedule,
        running_totals,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Mortgage Amortization",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "monthly_rate": input.monthly_rate().to_string(),
            "term_years": input.term_years,
            "rounding": "half away from zero to cents, per component",
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_analysis() {
        let out = analyze_mortgage(&LoanInput::default()).unwrap();
        let analysis = &out.result;

        assert_eq!(analysis.schedule.len(), 360);
        assert_eq!(analysis.running_totals.len(), 360);
        assert_eq!(analysis.summary.monthly_payment, dec!(2973.77));
        assert!(out.warnings.is_empty());
        assert_eq!(out.methodology, "Fixed-Rate Mortgage Amortization");
        assert_eq!(out.assumptions["term_years"], 30);
        let monthly_rate: Decimal = out.assumptions["monthly_rate"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(monthly_rate, dec!(0.005));
    }

    #[test]
    fn test_zero_rate_warns() {
        let input = LoanInput::new(dec!(120000), Decimal::ZERO, 10).unwrap();
        let out = analyze_mortgage(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.result.summary.total_interest, Decimal::ZERO);
        assert_eq!(out.result.summary.final_balance, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let input = LoanInput {
            principal: dec!(-5),
            annual_rate_percent: dec!(4),
            term_years: 5,
        };
        assert!(analyze_mortgage(&input).is_err());
    }
}
