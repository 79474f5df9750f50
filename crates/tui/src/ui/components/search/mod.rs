mod search_component;

pub use search_component::SearchComponent;
