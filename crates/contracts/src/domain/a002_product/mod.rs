pub mod aggregate;
pub mod listing;

pub use aggregate::{Product, ProductRecord};
pub use listing::ProductListingDraft;
