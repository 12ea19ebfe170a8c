use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::MONTHS_PER_YEAR;
use crate::error::MortgageError;
use crate::types::{Money, Percent, Rate};
use crate::MortgageResult;

pub const FIELD_PRINCIPAL: &str = "principal";
pub const FIELD_ANNUAL_RATE: &str = "annual_rate_percent";
pub const FIELD_TERM_YEARS: &str = "term_years";

/// Longest term the calculator will schedule.
pub const MAX_TERM_YEARS: u32 = 100;

/// Loan terms as entered on the calculator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Money,
    /// Nominal annual rate in percent (6.0 = 6%).
    pub annual_rate_percent: Percent,
    /// Term in whole years.
    pub term_years: u32,
}

impl Default for LoanInput {
    /// The values the calculator page resets to.
    fn default() -> Self {
        LoanInput {
            principal: dec!(496000),
            annual_rate_percent: dec!(6.0),
            term_years: 30,
        }
    }
}

impl LoanInput {
    /// Build and validate in one step.
    pub fn new(
        principal: Money,
        annual_rate_percent: Percent,
        term_years: u32,
    ) -> MortgageResult<Self> {
        let input = LoanInput {
            principal,
            annual_rate_percent,
            term_years,
        };
        input.validate()?;
        Ok(input)
    }

    /// Parse the three raw form values.
    ///
    /// Surrounding whitespace is ignored. Principal and rate accept plain or
    /// scientific decimal notation; the term must be a whole number of years.
    pub fn parse(
        principal: &str,
        annual_rate_percent: &str,
        term_years: &str,
    ) -> MortgageResult<Self> {
        let principal = parse_decimal(FIELD_PRINCIPAL, principal)?;
        let annual_rate_percent = parse_decimal(FIELD_ANNUAL_RATE, annual_rate_percent)?;
        let term_years = parse_term(term_years)?;
        Self::new(principal, annual_rate_percent, term_years)
    }

    pub fn validate(&self) -> MortgageResult<()> {
        let rejected = if self.principal <= Decimal::ZERO {
            Some(MortgageError::invalid(
                FIELD_PRINCIPAL,
                "Principal must be positive",
            ))
        } else if self.annual_rate_percent < Decimal::ZERO {
            Some(MortgageError::invalid(
                FIELD_ANNUAL_RATE,
                "Annual interest rate cannot be negative",
            ))
        } else if self.term_years == 0 {
            Some(MortgageError::invalid(
                FIELD_TERM_YEARS,
                "Term must be at least 1 year",
            ))
        } else if self.term_years > MAX_TERM_YEARS {
            Some(MortgageError::invalid(
                FIELD_TERM_YEARS,
                format!("Term cannot exceed {MAX_TERM_YEARS} years"),
            ))
        } else {
            None
        };

        match rejected {
            Some(err) => {
                tracing::warn!(field = err.field(), error = %err, "rejected loan input");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Number of monthly installments over the whole term.
    pub fn total_months(&self) -> u32 {
        self.term_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// annual percent / 100 / 12
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
    }
}

fn parse_decimal(field: &str, raw: &str) -> MortgageResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MortgageError::invalid(field, "A value is required"));
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MortgageError::invalid(field, format!("'{trimmed}' is not a number")))
}

fn parse_term(raw: &str) -> MortgageResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MortgageError::invalid(FIELD_TERM_YEARS, "A value is required"));
    }
    trimmed.parse::<u32>().map_err(|_| {
        let reason = if trimmed.parse::<Decimal>().is_ok() {
            format!("'{trimmed}' is not a positive whole number of years")
        } else {
            format!("'{trimmed}' is not a number")
        };
        MortgageError::invalid(FIELD_TERM_YEARS, reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_values() {
        let input = LoanInput::parse(" 496000 ", "6.0", "30").unwrap();
        assert_eq!(input, LoanInput::default());
        assert_eq!(input.total_months(), 360);
        assert_eq!(input.monthly_rate(), dec!(0.005));
    }

    #[test]
    fn test_parse_scientific_principal() {
        let input = LoanInput::parse("2.5e5", "4", "15").unwrap();
        assert_eq!(input.principal, dec!(250000));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = LoanInput::parse("abc", "6", "30").unwrap_err();
        assert_eq!(err.field(), FIELD_PRINCIPAL);

        let err = LoanInput::parse("100000", "six", "30").unwrap_err();
        assert_eq!(err.field(), FIELD_ANNUAL_RATE);

        let err = LoanInput::parse("100000", "6", "").unwrap_err();
        assert_eq!(err.field(), FIELD_TERM_YEARS);
    }

    #[test]
    fn test_parse_rejects_fractional_and_negative_term() {
        for raw in ["30.5", "-3"] {
            let err = LoanInput::parse("100000", "6", raw).unwrap_err();
            assert_eq!(err.field(), FIELD_TERM_YEARS);
            assert!(err.to_string().contains("whole number"), "{err}");
        }
    }

    #[test]
    fn test_validate_bounds() {
        assert!(LoanInput::new(dec!(0), dec!(5), 10).is_err());
        assert!(LoanInput::new(dec!(-1), dec!(5), 10).is_err());
        assert!(LoanInput::new(dec!(1000), dec!(-0.1), 10).is_err());
        assert!(LoanInput::new(dec!(1000), dec!(5), 0).is_err());
        assert!(LoanInput::new(dec!(1000), dec!(5), u32::MAX).is_err());
        assert!(LoanInput::new(dec!(1000), Decimal::ZERO, 1).is_ok());
    }

    #[test]
    fn test_term_is_capped() {
        assert!(LoanInput::new(dec!(1000), dec!(5), MAX_TERM_YEARS).is_ok());

        for raw in ["101", "10000000", "357913941"] {
            let err = LoanInput::parse("1000", "0", raw).unwrap_err();
            assert_eq!(err.field(), FIELD_TERM_YEARS);
            assert!(err.to_string().contains("cannot exceed 100"), "{err}");
        }
    }
}
