//! # Tabview Engine
//!
//! The engine turns an in-memory collection of records into the page a user
//! sees. It owns no I/O and no rendering; the TUI and the CLI drive it.
//!
//! ## Pipeline
//!
//! ```text
//! records ──filter(search)──▶ filtered ──sort(key, dir)──▶ sorted ──paginate(page)──▶ page
//! ```
//!
//! Each stage is also available as a free function so callers can use them
//! without a [`TabularView`].
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use tabview_engine::TabularView;
//! use tabview_types::{SortDirection, ViewConfig, records_from_json};
//!
//! let records = records_from_json(json!([
//!     {"name": "bob", "amount": 12},
//!     {"name": "Alice", "amount": 7},
//! ]))?;
//! let mut view = TabularView::with_inferred_columns(records, ViewConfig::default());
//! view.set_sort("amount", SortDirection::Asc);
//!
//! let snapshot = view.snapshot();
//! assert_eq!(snapshot.rows[0].get("name"), Some(&json!("Alice")));
//! assert_eq!(snapshot.range_label.to_string(), "Showing 1–2 of 2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - **`filter`**: case-insensitive substring search over every field
//! - **`sort`**: stable single-column sort with a per-column comparison mode
//! - **`paginate`**: page windows and the range label
//! - **`state`**: the user-controlled state and its transitions
//! - **`view`**: [`TabularView`] and its render-ready [`ViewSnapshot`]

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod view;

pub use filter::{filter_records, record_matches};
pub use paginate::{PageWindow, RangeLabel, clamp_page, max_page, paginate};
pub use sort::{CompareMode, compare_mode, compare_values, sort_records};
pub use state::{ViewPhase, ViewState};
pub use view::{HeaderSort, HeaderView, TabularView, ViewSnapshot};
