//! View options and the serializable config-file shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Placeholder shown when the filtered collection is empty.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No matching records";

/// Ordering applied to the sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

/// A render-side affordance that can be invoked on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    /// Text shown to the user.
    pub label: String,
    /// Key that triggers the action on the selected row.
    pub hotkey: char,
}

impl RowAction {
    pub fn new(label: impl Into<String>, hotkey: char) -> Self {
        Self {
            label: label.into(),
            hotkey,
        }
    }
}

/// Presentation options for a view instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub title: String,
    /// Rows per page; always at least 1.
    pub page_size: usize,
    pub empty_message: String,
    pub row_actions: Vec<RowAction>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            row_actions: Vec::new(),
        }
    }
}

impl ViewConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the page size, raising zero to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_row_actions(mut self, row_actions: Vec<RowAction>) -> Self {
        self.row_actions = row_actions;
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

/// Named cell formats available from config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CellFormat {
    /// The value coerced to text.
    #[default]
    Plain,
    /// Fixed-decimal amount with a currency symbol and thousands separators.
    Currency {
        #[serde(default = "default_currency_symbol")]
        symbol: String,
        #[serde(default = "default_currency_decimals")]
        decimals: usize,
    },
    /// Ratio rendered as a percentage (`0.125` → `12.5%`).
    Percent {
        #[serde(default = "default_percent_decimals")]
        decimals: usize,
    },
    /// Date or timestamp reformatted with a chrono pattern.
    Date {
        #[serde(default = "default_date_pattern")]
        pattern: String,
    },
    /// Booleans rendered as check marks.
    Check,
    /// Value hidden behind a fixed mask.
    Masked,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> usize {
    2
}

fn default_percent_decimals() -> usize {
    1
}

fn default_date_pattern() -> String {
    "%Y-%m-%d".to_string()
}

/// A column declared in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    /// Header text; derived from the key when omitted.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    #[serde(default)]
    pub format: Option<CellFormat>,
}

fn default_sortable() -> bool {
    true
}

/// Top-level shape of a view config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfigFile {
    pub title: Option<String>,
    pub page_size: Option<usize>,
    pub empty_message: Option<String>,
    pub columns: Vec<ColumnSpec>,
    pub row_actions: Vec<RowAction>,
}

impl ViewConfigFile {
    /// Presentation options described by the file, with defaults filled in.
    pub fn view_config(&self) -> ViewConfig {
        let mut config = ViewConfig::default().with_row_actions(self.row_actions.clone());
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(message) = &self.empty_message {
            config = config.with_empty_message(message.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_and_flips() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(" ascending ".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(ViewConfig::default().with_page_size(0).page_size, 1);
        assert_eq!(ViewConfig::default().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn config_file_parses_from_yaml() {
        let yaml = r#"
title: Transactions
page_size: 25
columns:
  - key: id
    sortable: false
  - key: amount
    label: Amount
    format:
      type: currency
      symbol: "€"
  - key: posted_at
    format:
      type: date
row_actions:
  - label: Inspect
    hotkey: "1"
"#;
        let file: ViewConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.columns.len(), 3);
        assert!(!file.columns[0].sortable);
        assert!(file.columns[1].sortable);
        assert_eq!(
            file.columns[1].format,
            Some(CellFormat::Currency {
                symbol: "€".into(),
                decimals: 2
            })
        );
        assert_eq!(
            file.columns[2].format,
            Some(CellFormat::Date {
                pattern: "%Y-%m-%d".into()
            })
        );

        let config = file.view_config();
        assert_eq!(config.title, "Transactions");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
        assert_eq!(config.row_actions, vec![RowAction::new("Inspect", '1')]);
    }
}
