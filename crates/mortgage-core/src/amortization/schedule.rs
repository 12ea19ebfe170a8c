//! Level-payment amortization.
//!
//! A fixed-rate loan is repaid in equal monthly installments. Each
//! installment first covers the interest accrued on the outstanding balance;
//! the rest retires principal. Interest and principal are rounded to cents
//! independently, so a period's two components may differ from the exact
//! payment by up to one cent. That drift is left as is.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::input::{LoanInput, FIELD_ANNUAL_RATE};
use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

const CENT_DP: u32 = 2;

/// One monthly installment split into its two components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Month number (1-indexed).
    pub month: u32,
    /// Interest portion, rounded to cents.
    pub interest: Money,
    /// Principal portion, rounded to cents.
    pub principal: Money,
}

/// Installments in month order, one per month of the term.
pub type Schedule = Vec<PaymentPeriod>;

/// Round half away from zero to cents.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Constant monthly installment that retires the loan over its term (unrounded).
pub fn monthly_payment(input: &LoanInput) -> MortgageResult<Money> {
    input.validate()?;
    level_payment(input.principal, input.monthly_rate(), input.total_months())
}

/// Annuity payment `P * r / (1 - (1+r)^-n)`.
///
/// Discounting with `1/(1+r)` keeps every power at or below one, so high
/// rates over long terms cannot overflow. Once `(1+r)^-n` falls below decimal
/// resolution the payment is interest only. At a zero rate (or one too small
/// to move the discount factor off 1) the principal is spread evenly.
fn level_payment(principal: Money, rate: Rate, months: u32) -> MortgageResult<Money> {
    let straight_line = principal / Decimal::from(months);
    if rate.is_zero() {
        return Ok(straight_line);
    }

    let discount = Decimal::ONE / (Decimal::ONE + rate);
    let denominator = Decimal::ONE - discount.powu(u64::from(months));
    if denominator.is_zero() {
        return Ok(straight_line);
    }

    // Only a payment beyond the decimal range itself can fail here.
    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| {
            MortgageError::invalid(FIELD_ANNUAL_RATE, "Monthly payment is too large to represent")
        })
}

/// Build the month-by-month schedule for a validated loan.
pub fn compute_schedule(input: &LoanInput) -> MortgageResult<Schedule> {
    amortize(input).map(|(schedule, _)| schedule)
}

/// Balance left after the last installment, before any rounding.
///
/// Zero up to decimal precision whenever `(1+r)^n` stays within the 28
/// significant digits a `Decimal` carries.
pub fn closing_balance(input: &LoanInput) -> MortgageResult<Money> {
    amortize(input).map(|(_, balance)| balance)
}

fn amortize(input: &LoanInput) -> MortgageResult<(Schedule, Money)> {
    let payment = monthly_payment(input)?;
    let rate = input.monthly_rate();
    let total_months = input.total_months();

    let mut schedule = Vec::with_capacity(total_months as usize);
    let mut balance = input.principal;

    for month in 1..=total_months {
        let interest = balance * rate;
        let principal = payment - interest;
        balance -= principal;

        schedule.push(PaymentPeriod {
            month,
            interest: round_to_cents(interest),
            principal: round_to_cents(principal),
        });
    }

    tracing::debug!(
        principal = %input.principal,
        annual_rate_percent = %input.annual_rate_percent,
        term_years = input.term_years,
        payment = %payment,
        residual = %balance,
        "computed amortization schedule"
    );

    Ok((schedule, balance))
}
