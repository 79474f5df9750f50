//! UI components: search, table, pagination.

pub mod common;
pub mod component;
pub mod pagination;
pub mod search;
pub mod table;

pub use pagination::PaginationComponent;
pub use search::SearchComponent;
pub use table::TableComponent;
