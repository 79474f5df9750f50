//! Records: the rows a tabular view displays.
//!
//! A record is an insertion-ordered map from field name to JSON value. No
//! schema is enforced beyond "it is an object"; the column descriptors decide
//! which fields are shown. Validation happens once, when raw JSON is turned
//! into records, so the pipeline never has to deal with non-object rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error surfaced when raw JSON cannot be turned into records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A row at the given index was not a JSON object.
    #[error("row {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },
    /// The payload contained no array of rows.
    #[error("payload contains no array of rows (found {found})")]
    NoRows { found: &'static str },
}

/// One row of displayable data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if the record has that field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts or replaces a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Converts the record back into a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(RecordError::NotAnObject {
                index: 0,
                found: json_kind(&other),
            }),
        }
    }
}

/// Turns a JSON payload into records.
///
/// Accepts either an array of objects or an object envelope whose first
/// array-valued field holds the rows (e.g. `{"data": [...]}`).
pub fn records_from_json(payload: Value) -> Result<Vec<Record>, RecordError> {
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(map) => map
            .into_iter()
            .find_map(|(_, value)| match value {
                Value::Array(rows) => Some(rows),
                _ => None,
            })
            .ok_or(RecordError::NoRows { found: "object" })?,
        other => return Err(RecordError::NoRows { found: json_kind(&other) }),
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(RecordError::NotAnObject {
                index,
                found: json_kind(&other),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
