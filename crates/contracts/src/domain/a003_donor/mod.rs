pub mod aggregate;

pub use aggregate::{Availability, BloodGroup, Donor, DonorRecord};
