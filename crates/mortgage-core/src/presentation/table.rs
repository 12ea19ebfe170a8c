use serde::{Deserialize, Serialize};

use crate::amortization::schedule::PaymentPeriod;
use crate::amortization::totals::compute_running_totals;
use crate::amortization::MONTHS_PER_YEAR;
use crate::types::Money;

pub const TABLE_HEADERS: [&str; 7] = [
    "Year",
    "Month",
    "Interest",
    "Principal",
    "Total Interest",
    "Total Principal",
    "Remaining Principal",
];

/// Header cell spanning the rows of one loan year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCell {
    pub label: String,
    pub row_span: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Present on the first month of each year only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<YearCell>,
    pub month: u32,
    pub interest: Money,
    pub principal: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    pub remaining_principal: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// One row per installment with running totals alongside.
pub fn build_table(schedule: &[PaymentPeriod], principal: Money) -> AmortizationTable {
    let totals = compute_running_totals(schedule, principal);

    let rows = schedule
        .iter()
        .zip(totals)
        .enumerate()
        .map(|(i, (period, total))| {
            let index = i as u32;
            let year = (index % MONTHS_PER_YEAR == 0).then(|| YearCell {
                label: format!("Year {}", index / MONTHS_PER_YEAR + 1),
                row_span: MONTHS_PER_YEAR,
            });
            TableRow {
                year,
                month: period.month,
                interest: period.interest,
                principal: period.principal,
                total_interest: total.running_interest,
                total_principal: total.running_principal,
                remaining_principal: total.remaining_balance,
            }
        })
        .collect();

    AmortizationTable {
        headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::input::LoanInput;
    use crate::amortization::schedule::compute_schedule;
    use rust_decimal_macros::dec;

    #[test]
    fn test_year_cells_every_twelve_rows() {
        let input = LoanInput::new(dec!(24000), dec!(0), 3).unwrap();
        let table = build_table(&compute_schedule(&input).unwrap(), input.principal);

        assert_eq!(table.headers.len(), 7);
        assert_eq!(table.rows.len(), 36);
        for (i, row) in table.rows.iter().enumerate() {
            match &row.year {
                Some(cell) => {
                    assert_eq!(i % 12, 0);
                    assert_eq!(cell.label, format!("Year {}", i / 12 + 1));
                    assert_eq!(cell.row_span, 12);
                }
                None => assert_ne!(i % 12, 0),
            }
        }
    }

    #[test]
    fn test_rows_carry_running_totals() {
        let input = LoanInput::new(dec!(24000), dec!(0), 2).unwrap();
        let table = build_table(&compute_schedule(&input).unwrap(), input.principal);

        let third = &table.rows[2];
        assert_eq!(third.month, 3);
        assert_eq!(third.principal, dec!(1000));
        assert_eq!(third.total_principal, dec!(3000));
        assert_eq!(third.remaining_principal, dec!(21000));
        assert_eq!(table.rows[23].remaining_principal, dec!(0));
    }
}
