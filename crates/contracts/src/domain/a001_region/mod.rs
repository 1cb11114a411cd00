pub mod aggregate;
pub mod registry;

pub use aggregate::{GeoPoint, Region, RegionId, RegionKind, RegionShape};
pub use registry::RegionRegistry;
