pub mod config;
pub mod error;
pub mod geo;

pub use config::{Config, EndpointConfig, HttpConfig, ValidationResult};
pub use error::ApiError;
pub use geo::Coordinate;

use anyhow::Result;

/// Initialize the core runtime pieces (logging).
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Friluft core initialized");
    Ok(())
}
