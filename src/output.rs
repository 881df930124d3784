//! Record output.
//!
//! Two formats: a human-readable `Label: value` table with a dashed
//! separator after each record, and JSONL with one serialized record per
//! line.

use serde::Serialize;
use std::fmt::Display;

const SEPARATOR_WIDTH: usize = 20;

/// A record that can be rendered as labeled rows.
///
/// Implementations list their rows explicitly, so each resource controls its
/// own labels and ordering.
pub trait Tabular {
    /// The record's rows as `(label, value)` pairs, in display order.
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Prints one record's rows followed by the record separator.
pub fn print_record<T: Tabular>(record: &T) {
    for (label, value) in record.rows() {
        println!("{label}: {value}");
    }
    print_separator();
}

/// Prints each record's rows, separating records with a dashed line.
pub fn print_records<T: Tabular>(records: &[T]) {
    for record in records {
        print_record(record);
    }
}

/// Prints the 20-dash record separator.
pub fn print_separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Prints each record as one line of JSON.
///
/// # Errors
///
/// Returns a serialization error if a record cannot be encoded.
pub fn print_jsonl<T: Serialize>(records: &[T]) -> Result<(), serde_json::Error> {
    for record in records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

/// Formats an optional value, rendering `None` as an empty string.
#[must_use]
pub fn display_opt<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record;

    impl Tabular for Record {
        fn rows(&self) -> Vec<(&'static str, String)> {
            vec![("Id", "1".to_string()), ("Name", "test".to_string())]
        }
    }

    #[test]
    fn test_rows_are_label_value_pairs() {
        let rows = Record.rows();
        assert_eq!(rows[0], ("Id", "1".to_string()));
    }

    #[test]
    fn test_display_opt_renders_none_as_empty() {
        assert_eq!(display_opt(Some(&42)), "42");
        assert_eq!(display_opt::<i32>(None), "");
    }
}
