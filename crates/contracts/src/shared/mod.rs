pub mod fixture;
pub mod region_filter;
pub mod selection;
pub mod view_state;
