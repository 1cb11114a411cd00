pub mod card;
pub mod list;
pub mod listing_form;
