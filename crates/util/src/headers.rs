//! Column inference and header labels for records without configured columns.

use std::collections::HashMap;

use heck::ToTitleCase;
use serde_json::Value;
use tabview_types::{ColumnDescriptor, Record};

use crate::date_handling::is_date_like_key;

/// Rows sampled when scoring keys.
const SCORE_SAMPLE: usize = 50;

/// Infers columns from the records: every key seen, in first-seen order,
/// ranked so identifying and descriptive keys lead.
///
/// Ranking is stable; keys with equal scores keep their first-seen order.
pub fn infer_columns(records: &[Record]) -> Vec<ColumnDescriptor> {
    infer_keys(records)
        .into_iter()
        .map(|key| {
            let label = normalize_header(&key);
            ColumnDescriptor::new(key, label)
        })
        .collect()
}

/// Ranked field keys; see [`infer_columns`].
pub fn infer_keys(records: &[Record]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut score: HashMap<String, i32> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        for (key, value) in record.iter() {
            if !score.contains_key(key) {
                seen.push(key.to_string());
                score.insert(key.to_string(), base_key_score(key));
            }
            if idx < SCORE_SAMPLE
                && let Some(entry) = score.get_mut(key)
            {
                // Penalize nested arrays/objects and long free text
                match value {
                    Value::Array(_) | Value::Object(_) => *entry -= 1,
                    Value::String(s) if s.len() > 80 => *entry -= 1,
                    _ => {}
                }
            }
        }
    }
    let mut keys: Vec<(usize, String)> = seen.into_iter().enumerate().collect();
    keys.sort_by_key(|(order, key)| (-score.get(key).copied().unwrap_or(0), *order));
    keys.into_iter().map(|(_, key)| key).collect()
}

/// Heuristic importance of a key based on its name.
pub fn base_key_score(key: &str) -> i32 {
    let l = key.to_lowercase();
    let mut s = 0;
    if l == "id" || l.ends_with("_id") {
        s += 10;
    }
    if l.contains("name") || l == "description" || l == "merchant" {
        s += 9;
    }
    if l.contains("amount") || l.contains("balance") || l.contains("price") {
        s += 8;
    }
    if l.contains("status") || l.contains("state") {
        s += 7;
    }
    if is_date_like_key(&l) {
        s += 6;
    }
    if l.contains("currency") || l.contains("account") || l.contains("category") {
        s += 4;
    }
    s * SCORE_SAMPLE as i32
}

/// Human-friendly header for a field key.
///
/// `created_at` → `Created At`, `app_id` → `App ID`, `webhookURL` →
/// `Webhook URL`.
pub fn normalize_header(key: &str) -> String {
    key.to_title_case()
        .split(' ')
        .map(preserve_acronym)
        .collect::<Vec<_>>()
        .join(" ")
}

fn preserve_acronym(word: &str) -> String {
    match word.to_ascii_uppercase().as_str() {
        "ID" => "ID".into(),
        "URL" => "URL".into(),
        "HTTP" => "HTTP".into(),
        "API" => "API".into(),
        "IBAN" => "IBAN".into(),
        _ => word.to_string(),
    }
}
