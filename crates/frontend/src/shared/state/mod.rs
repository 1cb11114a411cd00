pub mod catalog_view;
pub mod selection_store;

pub use catalog_view::CatalogViewModel;
pub use selection_store::{use_selection, SelectionStore};
