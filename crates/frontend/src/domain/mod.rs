pub mod a001_region;
pub mod a002_product;
pub mod a003_donor;
