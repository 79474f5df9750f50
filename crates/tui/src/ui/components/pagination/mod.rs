mod pagination_component;

pub use pagination_component::PaginationComponent;
