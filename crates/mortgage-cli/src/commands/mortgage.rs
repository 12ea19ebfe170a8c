use clap::Args;
use serde_json::{json, Value};

use mortgage_core::amortization::analysis;
use mortgage_core::amortization::input::LoanInput;
use mortgage_core::amortization::labels::format_period_label;
use mortgage_core::amortization::schedule::compute_schedule;
use mortgage_core::presentation::{chart, table};

use crate::input;

/// Loan terms, from flags, a JSON file, or JSON on stdin
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Annual interest rate in percent (e.g. 6.0)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Term in whole years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Use the calculator's reset values: 496000 at 6.0% over 30 years
    #[arg(long, conflicts_with_all = ["input", "principal", "rate", "years"])]
    pub reference: bool,
}

/// Arguments for period label formatting
#[derive(Args)]
pub struct LabelArgs {
    /// Month number (1-indexed)
    #[arg(long)]
    pub month: u32,
}

fn resolve_loan(args: LoanArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        let loan: LoanInput = input::file::read_json(path)?;
        loan.validate()?;
        return Ok(loan);
    }

    if args.reference {
        return Ok(LoanInput::default());
    }

    if args.principal.is_some() || args.rate.is_some() || args.years.is_some() {
        let principal = args
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
        let years = args.years.ok_or("--years is required (or provide --input)")?;
        return Ok(LoanInput::parse(&principal, &rate, &years)?);
    }

    if let Some(loan) = input::stdin::read_stdin::<LoanInput>()? {
        loan.validate()?;
        return Ok(loan);
    }

    Err("--principal, --rate and --years are required (or provide --input / stdin)".into())
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(args)?;
    let result = analysis::analyze_mortgage(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_chart(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(args)?;
    let schedule = compute_schedule(&loan)?;
    Ok(serde_json::to_value(chart::build_chart_data(&schedule))?)
}

pub fn run_table(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_loan(args)?;
    let schedule = compute_schedule(&loan)?;
    Ok(serde_json::to_value(table::build_table(
        &schedule,
        loan.principal,
    ))?)
}

pub fn run_label(args: LabelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.month == 0 {
        return Err("--month must be at least 1".into());
    }
    Ok(json!({
        "month": args.month,
        "label": format_period_label(args.month),
    }))
}
