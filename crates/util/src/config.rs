//! View config file loading.
//!
//! A view config is a small YAML or JSON document describing the title,
//! page size, columns and row actions of a view. The format is chosen by
//! file extension (`.json` is JSON, everything else is parsed as YAML, which
//! also accepts JSON documents).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{data_dir, home_dir};
use tabview_types::{CellFormat, ColumnDescriptor, ViewConfig, ViewConfigFile};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cell_format::column_from_spec;
use crate::date_handling::is_valid_date_pattern;

/// Environment variable naming a default config file.
pub const CONFIG_PATH_ENV: &str = "TABVIEW_CONFIG";

/// Environment variable overriding the log file used in TUI mode.
pub const LOG_PATH_ENV: &str = "TABVIEW_LOG";

/// Error surfaced when reading a config file fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid date pattern {pattern:?} for column {column} in {path}")]
    InvalidFormat {
        path: PathBuf,
        column: String,
        pattern: String,
    },
}

/// A parsed config file turned into view inputs.
#[derive(Debug, Clone, Default)]
pub struct LoadedViewConfig {
    pub config: ViewConfig,
    /// Columns declared in the file; empty means "infer from records".
    pub columns: Vec<ColumnDescriptor>,
}

impl From<ViewConfigFile> for LoadedViewConfig {
    fn from(file: ViewConfigFile) -> Self {
        let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(file.columns.len());
        for spec in &file.columns {
            if columns.iter().any(|existing| existing.key == spec.key) {
                warn!(key = %spec.key, "Duplicate column in config; keeping the first");
                continue;
            }
            columns.push(column_from_spec(spec));
        }
        let mut config = file.view_config();
        let mut seen_hotkeys: Vec<char> = Vec::new();
        config.row_actions.retain(|action| {
            if seen_hotkeys.contains(&action.hotkey) {
                warn!(hotkey = %action.hotkey, label = %action.label, "Duplicate row action hotkey; ignoring");
                return false;
            }
            seen_hotkeys.push(action.hotkey);
            true
        });
        Self { config, columns }
    }
}

/// Parses config text; `json` selects the JSON parser.
///
/// Date patterns are checked here so a bad pattern fails at load time
/// instead of on every render.
pub fn parse_view_config(text: &str, json: bool, path: &Path) -> Result<ViewConfigFile, ConfigError> {
    let file: ViewConfigFile = if json {
        serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else if text.trim().is_empty() {
        ViewConfigFile::default()
    } else {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };
    validate_formats(&file, path)?;
    Ok(file)
}

fn validate_formats(file: &ViewConfigFile, path: &Path) -> Result<(), ConfigError> {
    for spec in &file.columns {
        if let Some(CellFormat::Date { pattern }) = &spec.format
            && !is_valid_date_pattern(pattern)
        {
            return Err(ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                column: spec.key.clone(),
                pattern: pattern.clone(),
            });
        }
    }
    Ok(())
}

/// Reads and parses the config at `path`.
pub fn load_view_config(path: &Path) -> Result<LoadedViewConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let file = parse_view_config(&text, is_json, path)?;
    debug!(path = %path.display(), columns = file.columns.len(), "Loaded view config");
    Ok(file.into())
}

/// The config path to use: the explicit one, else `TABVIEW_CONFIG`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let value = env::var(CONFIG_PATH_ENV).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(expand_tilde(trimmed))
}

/// Log file used while the terminal UI owns the screen.
pub fn default_log_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tabview")
        .join("tabview.log")
}

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
