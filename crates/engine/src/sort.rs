//! Sort stage: stable ordering on one column.
//!
//! The comparison mode is chosen once per sort from the values present in
//! the column, which keeps the ordering total even for mixed columns:
//!
//! - all numbers → numeric
//! - all booleans → `false < true`
//! - all date-like strings → chronological
//! - all strings → lexicographic
//! - anything else → the values' string coercions, lexicographic
//!
//! Missing fields and `null` sort before every present value in ascending
//! order (and after them in descending order).

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde_json::Value;
use tabview_types::{Record, SortDirection};
use tabview_util::{parse_date_like, value_to_text};

/// How values of one column are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    Numeric,
    Boolean,
    Chronological,
    Lexicographic,
    /// Mixed types; compare the string coercions.
    Coerced,
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Missing,
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    fn order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // A single mode is used per sort, so keys never mix kinds.
            _ => Ordering::Equal,
        }
    }
}

/// Picks the comparison mode for the values of one column.
pub fn compare_mode<'a>(values: impl IntoIterator<Item = Option<&'a Value>>) -> CompareMode {
    let mut mode: Option<CompareMode> = None;
    for value in values.into_iter().flatten() {
        let value_mode = match value {
            Value::Null => continue,
            Value::Number(_) => CompareMode::Numeric,
            Value::Bool(_) => CompareMode::Boolean,
            Value::String(s) if parse_date_like(s).is_some() => CompareMode::Chronological,
            Value::String(_) => CompareMode::Lexicographic,
            Value::Array(_) | Value::Object(_) => return CompareMode::Coerced,
        };
        mode = Some(match (mode, value_mode) {
            (None, m) => m,
            (Some(current), m) if current == m => current,
            // Dates and free text are both strings: fall back to plain text order.
            (Some(CompareMode::Chronological), CompareMode::Lexicographic)
            | (Some(CompareMode::Lexicographic), CompareMode::Chronological) => CompareMode::Lexicographic,
            _ => return CompareMode::Coerced,
        });
    }
    mode.unwrap_or(CompareMode::Lexicographic)
}

fn sort_key(value: Option<&Value>, mode: CompareMode) -> SortKey {
    let value = match value {
        None | Some(Value::Null) => return SortKey::Missing,
        Some(value) => value,
    };
    match (mode, value) {
        (CompareMode::Numeric, Value::Number(n)) => SortKey::Number(n.as_f64().unwrap_or(0.0)),
        (CompareMode::Boolean, Value::Bool(b)) => SortKey::Bool(*b),
        (CompareMode::Chronological, Value::String(s)) => match parse_date_like(s) {
            Some(date) => SortKey::Date(date),
            None => SortKey::Text(s.clone()),
        },
        (_, other) => SortKey::Text(value_to_text(other)),
    }
}

/// Compares two optional values under `mode`.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, mode: CompareMode) -> Ordering {
    sort_key(a, mode).order(&sort_key(b, mode))
}

fn stable_sort<'v, T: Copy>(items: &[T], value_of: impl Fn(T) -> Option<&'v Value>, direction: SortDirection) -> Vec<T> {
    let mode = compare_mode(items.iter().map(|&item| value_of(item)));
    let mut keyed: Vec<(SortKey, T)> = items.iter().map(|&item| (sort_key(value_of(item), mode), item)).collect();
    // `sort_by` is stable: equal keys keep their input order in both directions.
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.order(b),
        SortDirection::Desc => b.order(a),
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Orders `order` (indices into `records`) by the `key` field.
pub(crate) fn sort_indices(records: &[Record], order: &[usize], key: &str, direction: SortDirection) -> Vec<usize> {
    stable_sort(order, |idx| records[idx].get(key), direction)
}

/// Returns `rows` ordered by the `key` field.
///
/// With no key the input order is returned unchanged.
pub fn sort_records<'a>(rows: &[&'a Record], key: Option<&str>, direction: SortDirection) -> Vec<&'a Record> {
    match key {
        Some(key) => stable_sort(rows, |record: &'a Record| record.get(key), direction),
        None => rows.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabview_types::records_from_json;

    fn field<'a>(rows: &[&'a Record], key: &str) -> Vec<&'a Value> {
        rows.iter().map(|r| r.get(key).unwrap_or(&Value::Null)).collect()
    }

    #[test]
    fn numbers_sort_numerically_not_lexically() {
        let records = records_from_json(json!([{"v": 10}, {"v": 9}, {"v": 100}, {"v": -1.5}])).unwrap();
        let rows: Vec<&Record> = records.iter().collect();
        let sorted = sort_records(&rows, Some("v"), SortDirection::Asc);
        assert_eq!(field(&sorted, "v"), vec![&json!(-1.5), &json!(9), &json!(10), &json!(100)]);
    }

    #[test]
    fn dates_sort_chronologically_across_offsets() {
        let records = records_from_json(json!([
            {"at": "2024-01-02T00:30:00+02:00"},
            {"at": "2024-01-01T23:00:00Z"},
            {"at": "2023-12-31"}
        ]))
        .unwrap();
        let rows: Vec<&Record> = records.iter().collect();
        let sorted = sort_records(&rows, Some("at"), SortDirection::Asc);
        assert_eq!(
            field(&sorted, "at"),
            vec![&json!("2023-12-31"), &json!("2024-01-02T00:30:00+02:00"), &json!("2024-01-01T23:00:00Z")]
        );
    }

    #[test]
    fn mixed_types_fall_back_to_string_coercion() {
        let values = [json!(10), json!("5"), json!(9)];
        assert_eq!(compare_mode(values.iter().map(Some)), CompareMode::Coerced);

        let records = records_from_json(json!([{"v": 10}, {"v": "5"}, {"v": 9}])).unwrap();
        let rows: Vec<&Record> = records.iter().collect();
        let sorted = sort_records(&rows, Some("v"), SortDirection::Asc);
        assert_eq!(field(&sorted, "v"), vec![&json!(10), &json!("5"), &json!(9)]);
    }

    #[test]
    fn missing_values_lead_ascending_and_trail_descending() {
        let records = records_from_json(json!([{"v": 2}, {"other": 1}, {"v": 1}, {"v": null}])).unwrap();
        let rows: Vec<&Record> = records.iter().collect();

        let asc = sort_records(&rows, Some("v"), SortDirection::Asc);
        assert!(asc[0].get("v").is_none());
        assert_eq!(asc[1].get("v"), Some(&Value::Null));
        assert_eq!(asc[2].get("v"), Some(&json!(1)));

        let desc = sort_records(&rows, Some("v"), SortDirection::Desc);
        assert_eq!(desc[0].get("v"), Some(&json!(2)));
        // Stable among the missing values in both directions.
        assert!(desc[2].get("v").is_none());
        assert_eq!(desc[3].get("v"), Some(&Value::Null));
    }

    #[test]
    fn booleans_and_text_modes() {
        assert_eq!(compare_mode([Some(&json!(true)), None, Some(&json!(false))]), CompareMode::Boolean);
        assert_eq!(compare_mode([Some(&json!("2024-01-01")), Some(&json!("soon"))]), CompareMode::Lexicographic);
        assert_eq!(compare_mode([Some(&json!({"a": 1}))]), CompareMode::Coerced);
        assert_eq!(compare_mode(std::iter::empty()), CompareMode::Lexicographic);
        assert_eq!(
            compare_values(Some(&json!(false)), Some(&json!(true)), CompareMode::Boolean),
            Ordering::Less
        );
    }

    #[test]
    fn no_key_passes_rows_through() {
        let records = records_from_json(json!([{"v": 3}, {"v": 1}])).unwrap();
        let rows: Vec<&Record> = records.iter().collect();
        assert_eq!(sort_records(&rows, None, SortDirection::Desc), rows);
    }
}
