//! Named cell formats and building column descriptors from config specs.

use serde_json::Value;
use tabview_types::{CellFormat, ColumnDescriptor, ColumnSpec, Record};

use crate::date_handling::format_date;
use crate::display::value_to_text;
use crate::headers::normalize_header;

const MASK: &str = "••••";

/// Formats a single value according to `format`.
///
/// Values the format cannot interpret (for example a string in a currency
/// column) fall back to the plain text so nothing is hidden from the user.
pub fn format_value(format: &CellFormat, value: &Value) -> String {
    match format {
        CellFormat::Plain => value_to_text(value),
        CellFormat::Currency { symbol, decimals } => match as_number(value) {
            Some(amount) => format_currency(amount, symbol, *decimals),
            None => value_to_text(value),
        },
        CellFormat::Percent { decimals } => match as_number(value) {
            Some(ratio) => format!("{:.*}%", *decimals, ratio * 100.0),
            None => value_to_text(value),
        },
        CellFormat::Date { pattern } => match value {
            Value::String(s) => format_date(s, pattern).unwrap_or_else(|| s.clone()),
            other => value_to_text(other),
        },
        CellFormat::Check => match value {
            Value::Bool(true) => "✓".to_string(),
            Value::Bool(false) => "✗".to_string(),
            other => value_to_text(other),
        },
        CellFormat::Masked => {
            if value.is_null() {
                String::new()
            } else {
                MASK.to_string()
            }
        }
    }
}

/// Builds a descriptor from a config-file column.
///
/// The label defaults to the normalised key; a format other than `plain`
/// installs a renderer that applies it.
pub fn column_from_spec(spec: &ColumnSpec) -> ColumnDescriptor {
    let label = spec.label.clone().unwrap_or_else(|| normalize_header(&spec.key));
    let column = ColumnDescriptor::new(spec.key.clone(), label).sortable(spec.sortable);
    match spec.format.clone() {
        None | Some(CellFormat::Plain) => column,
        Some(format) => {
            let key = spec.key.clone();
            column.with_render(move |record: &Record| match record.get(&key) {
                Some(value) => format_value(&format, value),
                None => String::new(),
            })
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn format_currency(amount: f64, symbol: &str, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{sign}{symbol}{grouped}.{fraction}"),
        None => format!("{sign}{symbol}{grouped}"),
    }
}
