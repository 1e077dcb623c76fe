//! Summary display formatting
//!
//! Formats per-category totals and the grand total for terminal display.

use crate::store::CategoryTotal;

/// Format per-category totals as a table with a header
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    let mut output = String::new();
    output.push_str("CATEGORY         TOTAL\n");
    output.push_str("------------------------\n");
    for entry in totals {
        output.push_str(&format!("{:<15} {:>10.2}\n", entry.category, entry.total));
    }
    output
}

/// Format the grand total line
pub fn format_total(total: f64) -> String {
    format!("Total amount spent: {:.2}", total)
}
