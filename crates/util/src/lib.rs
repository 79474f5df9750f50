//! Display, formatting and config helpers shared by the tabview crates.

pub mod cell_format;
pub mod config;
pub mod date_handling;
pub mod display;
pub mod headers;

pub use cell_format::{column_from_spec, format_value};
pub use config::{ConfigError, LoadedViewConfig, default_log_path, load_view_config, resolve_config_path};
pub use date_handling::{format_date, parse_date_like};
pub use display::{cell_text, value_to_text};
pub use headers::{infer_columns, normalize_header};
