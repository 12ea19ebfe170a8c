use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::input::LoanInput;
use super::schedule::{monthly_payment, round_to_cents, PaymentPeriod};
use crate::types::Money;
use crate::MortgageResult;

/// Cumulative position after a given installment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotal {
    pub month: u32,
    pub running_interest: Money,
    pub running_principal: Money,
    /// Original principal less all principal repaid so far.
    pub remaining_balance: Money,
}

/// Whole-loan figures over the rounded schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub monthly_payment: Money,
    pub total_months: u32,
    pub total_interest: Money,
    pub total_principal: Money,
    pub total_paid: Money,
    pub final_balance: Money,
}

/// Accumulate interest and principal period by period.
///
/// Totals are cumulative, so `schedule` must be in month order. Each row
/// includes its own period.
pub fn compute_running_totals(schedule: &[PaymentPeriod], principal: Money) -> Vec<RunningTotal> {
    let mut running_interest = Decimal::ZERO;
    let mut running_principal = Decimal::ZERO;

    schedule
        .iter()
        .map(|period| {
            running_interest += period.interest;
            running_principal += period.principal;
            RunningTotal {
                month: period.month,
                running_interest,
                running_principal,
                remaining_balance: principal - running_principal,
            }
        })
        .collect()
}

pub fn summarize(input: &LoanInput, schedule: &[PaymentPeriod]) -> MortgageResult<ScheduleSummary> {
    let payment = monthly_payment(input)?;
    let total_interest: Money = schedule.iter().map(|p| p.interest).sum();
    let total_principal: Money = schedule.iter().map(|p| p.principal).sum();

    Ok(ScheduleSummary {
        monthly_payment: round_to_cents(payment),
        total_months: schedule.len() as u32,
        total_interest,
        total_principal,
        total_paid: total_interest + total_principal,
        final_balance: input.principal - total_principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::schedule::compute_schedule;
    use rust_decimal_macros::dec;

    fn period(month: u32, interest: Decimal, principal: Decimal) -> PaymentPeriod {
        PaymentPeriod {
            month,
            interest,
            principal,
        }
    }

    #[test]
    fn test_running_totals_are_inclusive() {
        let schedule = vec![
            period(1, dec!(10.00), dec!(90.00)),
            period(2, dec!(5.50), dec!(94.50)),
            period(3, dec!(0.75), dec!(99.25)),
        ];
        let totals = compute_running_totals(&schedule, dec!(283.75));

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].running_interest, dec!(10.00));
        assert_eq!(totals[0].remaining_balance, dec!(193.75));
        assert_eq!(totals[1].running_interest, dec!(15.50));
        assert_eq!(totals[1].running_principal, dec!(184.50));
        assert_eq!(totals[2].running_interest, dec!(16.25));
        assert_eq!(totals[2].running_principal, dec!(283.75));
        assert_eq!(totals[2].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_empty_schedule_has_no_totals() {
        assert!(compute_running_totals(&[], dec!(1000)).is_empty());
    }

    #[test]
    fn test_summary_of_ten_year_loan() {
        let input = LoanInput::new(dec!(100000), dec!(5), 10).unwrap();
        let schedule = compute_schedule(&input).unwrap();
        let summary = summarize(&input, &schedule).unwrap();

        assert_eq!(summary.monthly_payment, dec!(1060.66));
        assert_eq!(summary.total_months, 120);
        assert_eq!(summary.total_interest, dec!(27278.66));
        assert_eq!(summary.total_principal, dec!(100000.02));
        assert_eq!(summary.final_balance, dec!(-0.02));
        assert_eq!(summary.total_paid, dec!(127278.68));
    }
}
