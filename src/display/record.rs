//! Record display formatting
//!
//! Numbered listings of incomes and expenses.

use super::DisplayOptions;
use crate::models::{Record, RecordKind};

/// Format one record as a numbered line, e.g. "1. $1000.00 - salary on 2024-03-01"
pub fn format_record_line(index: usize, record: &Record, options: &DisplayOptions) -> String {
    let description = if record.description().is_empty() {
        "(no description)"
    } else {
        record.description()
    };

    format!(
        "{}. {} - {} on {}",
        index,
        options.money(record.amount()),
        description,
        options.date(record.date())
    )
}

/// Format all records of one kind, numbered from 1
pub fn format_record_list(kind: RecordKind, records: &[Record], options: &DisplayOptions) -> String {
    if records.is_empty() {
        return format!("No {} recorded.\n", kind.plural().to_lowercase());
    }

    let mut output = format!("All {}:\n", kind.plural());
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_record_line(i + 1, record, options));
        output.push('\n');
    }

    output
}

/// Confirmation shown after a record is added
pub fn format_record_added(kind: RecordKind, record: &Record, options: &DisplayOptions) -> String {
    format!(
        "{} added: {} - {} on {}",
        kind.label(),
        options.money(record.amount()),
        record.description(),
        options.date(record.date())
    )
}
