//! Shared type definitions for tabview.
//!
//! These types are used by the engine (derivation pipeline), the util crate
//! (display and config helpers) and the terminal surface.

mod column;
mod record;
mod view;

pub use column::{CellRenderer, ColumnDescriptor};
pub use record::{Record, RecordError, records_from_json};
pub use view::{
    CellFormat, ColumnSpec, DEFAULT_EMPTY_MESSAGE, DEFAULT_PAGE_SIZE, RowAction, SortDirection, ViewConfig, ViewConfigFile,
};
