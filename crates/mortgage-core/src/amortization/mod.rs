pub mod analysis;
pub mod input;
pub mod labels;
pub mod schedule;
pub mod totals;

/// Installments per year of term.
pub const MONTHS_PER_YEAR: u32 = 12;
