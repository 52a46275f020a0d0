//! Pollen data provider: region forecasts resolved from a coordinate.

pub mod client;
pub mod repository;
pub mod types;

pub use client::PollenClient;
pub use repository::PollenRepository;
pub use types::{PollenRegion, RegionLookup};
