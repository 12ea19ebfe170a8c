use super::MONTHS_PER_YEAR;

/// Render a month count as elapsed years and months: `6mo`, `1y 0mo`, `2y 6mo`.
pub fn format_period_label(month: u32) -> String {
    if month < MONTHS_PER_YEAR {
        return format!("{month}mo");
    }
    let years = month / MONTHS_PER_YEAR;
    let months = month % MONTHS_PER_YEAR;
    format!("{years}y {months}mo")
}
