//! Activity catalog provider: the global activity templates with their
//! default weather thresholds.

pub mod client;
pub mod repository;
pub mod types;

pub use client::CatalogClient;
pub use repository::CatalogRepository;
pub use types::CatalogActivity;
