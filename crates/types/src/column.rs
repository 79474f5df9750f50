//! Column descriptors.
//!
//! A descriptor says how one field is labelled, whether it can be sorted, and
//! optionally how a record is turned into the cell text for that column.

use std::fmt;
use std::sync::Arc;

use crate::Record;

/// Formatting function mapping a record to the text shown in a cell.
pub type CellRenderer = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Metadata describing how to label, sort and render one field.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Field identifier looked up in each record.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether selecting the header sorts by this column.
    pub sortable: bool,
    /// Optional cell formatter; the plain value is shown when absent.
    pub render: Option<CellRenderer>,
}

impl ColumnDescriptor {
    /// Create a sortable column without a custom renderer.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            render: None,
        }
    }

    /// Mark the column as not sortable.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Attach a cell formatter.
    pub fn with_render(mut self, render: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Applies the custom renderer, if any.
    pub fn render_custom(&self, record: &Record) -> Option<String> {
        self.render.as_ref().map(|render| render(record))
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_defaults_to_sortable_plain_column() {
        let column = ColumnDescriptor::new("amount", "Amount");
        assert!(column.sortable);
        assert!(column.render.is_none());
        assert!(!column.unsortable().sortable);
    }

    #[test]
    fn custom_renderer_receives_the_whole_record() {
        let column = ColumnDescriptor::new("first", "Name").with_render(|record| {
            let first = record.get("first").and_then(|v| v.as_str()).unwrap_or_default();
            let last = record.get("last").and_then(|v| v.as_str()).unwrap_or_default();
            format!("{first} {last}")
        });
        let record = Record::try_from(json!({"first": "Ada", "last": "Lovelace"})).unwrap();
        assert_eq!(column.render_custom(&record).as_deref(), Some("Ada Lovelace"));
    }
}
