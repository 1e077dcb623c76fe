//! Line codec for the ledger file format
//!
//! One record per line, five fields separated by `|`:
//!
//! ```text
//! <id>|<date>|<category>|<amount>|<note>
//! ```
//!
//! Parsing is a pure function from a line of text to a record-or-skip
//! result; it never fails. Malformed numeric fields degrade to 0 / 0.0, and
//! lines with fewer than four fields are skipped outright. The note is the
//! remainder of the line after the fourth delimiter, so a note containing
//! `|` survives a round trip.
//!
//! The format does not escape the delimiter: a `|` inside the date or
//! category field shifts the remaining fields on reload. Known limitation
//! of the format, not a defect.

use crate::models::{Expense, ExpenseId};

/// Field delimiter of the ledger file format
pub const DELIMITER: char = '|';

/// Result of parsing one record line
#[derive(Debug, Clone, PartialEq)]
pub enum RecordLine {
    /// The line held a usable record
    Record(Expense),
    /// Blank or fewer than four fields; the line is discarded
    Skip,
}

/// Parse one ledger line into a record, or decide to skip it
///
/// Rules:
/// - the line is trimmed; a blank line is skipped;
/// - fewer than 4 fields (id, date, category, amount) skip the line;
/// - a missing 5th field means an empty note;
/// - an unparsable id becomes 0, an unparsable amount becomes 0.0;
/// - string fields are truncated to their maximum lengths.
pub fn parse_record_line(line: &str) -> RecordLine {
    let line = line.trim();
    if line.is_empty() {
        return RecordLine::Skip;
    }

    let mut fields = line.splitn(5, DELIMITER);
    let (Some(id), Some(date), Some(category), Some(amount)) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return RecordLine::Skip;
    };
    let note = fields.next().unwrap_or("");

    let id = id.trim().parse::<u64>().unwrap_or(0);
    let amount = amount.trim().parse::<f64>().unwrap_or(0.0);

    RecordLine::Record(Expense::new(ExpenseId::new(id), date, category, amount, note))
}

/// Format a record as a ledger line (no trailing newline)
///
/// The amount is written with exactly two fractional digits; precision
/// beyond cents is lost in a round trip.
pub fn format_record(expense: &Expense) -> String {
    format!(
        "{}{d}{}{d}{}{d}{:.2}{d}{}",
        expense.id,
        expense.date,
        expense.category,
        expense.amount,
        expense.note,
        d = DELIMITER
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MAX_CATEGORY_LEN, MAX_NOTE_LEN};

    fn parsed(line: &str) -> Expense {
        match parse_record_line(line) {
            RecordLine::Record(e) => e,
            RecordLine::Skip => panic!("expected record for line: {line:?}"),
        }
    }

    #[test]
    fn test_parse_well_formed_line() {
        let e = parsed("1|2024-01-01|Food|12.50|lunch");
        assert_eq!(e.id.value(), 1);
        assert_eq!(e.date, "2024-01-01");
        assert_eq!(e.category, "Food");
        assert_eq!(e.amount, 12.50);
        assert_eq!(e.note, "lunch");
    }

    #[test]
    fn test_parse_missing_note_defaults_empty() {
        let e = parsed("2|2024-01-02|Food|7.25");
        assert_eq!(e.note, "");
    }

    #[test]
    fn test_parse_note_keeps_embedded_delimiter() {
        let e = parsed("3|2024-01-03|Food|5.00|fish | chips");
        assert_eq!(e.note, "fish | chips");
    }

    #[test]
    fn test_parse_skips_short_lines() {
        assert_eq!(parse_record_line("3|2024-01-03|Transport"), RecordLine::Skip);
        assert_eq!(parse_record_line("3|2024-01-03"), RecordLine::Skip);
        assert_eq!(parse_record_line("3"), RecordLine::Skip);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        assert_eq!(parse_record_line(""), RecordLine::Skip);
        assert_eq!(parse_record_line("   \t"), RecordLine::Skip);
    }

    #[test]
    fn test_parse_zeroes_bad_numeric_fields() {
        let e = parsed("abc|2024-01-01|Food|not-a-number|note");
        assert_eq!(e.id.value(), 0);
        assert_eq!(e.amount, 0.0);
        // The rest of the line is still accepted.
        assert_eq!(e.category, "Food");
        assert_eq!(e.note, "note");
    }

    #[test]
    fn test_parse_truncates_long_fields() {
        let long_category = "c".repeat(60);
        let long_note = "n".repeat(150);
        let e = parsed(&format!("4|2024-01-04|{long_category}|1.00|{long_note}"));
        assert_eq!(e.category.chars().count(), MAX_CATEGORY_LEN);
        assert_eq!(e.note.chars().count(), MAX_NOTE_LEN);
    }

    #[test]
    fn test_format_uses_two_decimal_places() {
        let e = Expense::new(ExpenseId::new(1), "2024-01-01", "Food", 12.5, "lunch");
        assert_eq!(format_record(&e), "1|2024-01-01|Food|12.50|lunch");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let e = Expense::new(ExpenseId::new(9), "2024-03-05", "Groceries", 42.07, "weekly run");
        assert_eq!(parsed(&format_record(&e)), e);
    }

    #[test]
    fn test_round_trip_note_with_delimiter() {
        let e = Expense::new(ExpenseId::new(9), "2024-03-05", "Food", 4.0, "a|b|c");
        assert_eq!(parsed(&format_record(&e)).note, "a|b|c");
    }
}
