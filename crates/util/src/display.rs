//! Value → text coercion shared by filtering, sorting fallbacks and display.

use serde_json::Value;
use tabview_types::{ColumnDescriptor, Record};

/// String representation of a field value.
///
/// Strings are returned as-is, numbers by their JSON text, booleans as
/// `true`/`false`, `null` as the empty string, and nested arrays/objects as
/// compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text shown for `record` in `column`.
///
/// Uses the column's renderer when present, otherwise the plain value.
/// Missing fields render as an empty cell.
pub fn cell_text(column: &ColumnDescriptor, record: &Record) -> String {
    if let Some(rendered) = column.render_custom(record) {
        return rendered;
    }
    record.get(&column.key).map(value_to_text).unwrap_or_default()
}
