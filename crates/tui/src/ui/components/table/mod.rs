mod table_component;

pub use table_component::TableComponent;
