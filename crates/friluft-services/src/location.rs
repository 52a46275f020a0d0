//! Location resolution with stored-preference fallback.

use std::sync::Arc;

use async_trait::async_trait;
use friluft_core::Coordinate;
use friluft_store::PreferencesStore;

/// Failure from a platform location fix.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    Unavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Platform one-shot location fix.
///
/// Implementations attempt a single fresh fix and report failure rather
/// than blocking; the resolver handles every fallback.
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinate, LocationError>;
}

/// Resolves the coordinate the recommendation pipeline runs against.
///
/// A configured device locator wins when it grants a fix. Otherwise the
/// stored location preference applies, and since its default is the Oslo
/// coordinate, resolution always yields a value.
pub struct LocationResolver {
    device: Option<Arc<dyn DeviceLocator>>,
    prefs: Arc<PreferencesStore>,
}

impl LocationResolver {
    /// Resolver without a device locator; always uses the stored preference.
    pub fn new(prefs: Arc<PreferencesStore>) -> Self {
        Self {
            device: None,
            prefs,
        }
    }

    /// Resolver that tries the given locator before the stored preference.
    pub fn with_device(prefs: Arc<PreferencesStore>, device: Arc<dyn DeviceLocator>) -> Self {
        Self {
            device: Some(device),
            prefs,
        }
    }

    /// Resolve the current coordinate. Never fails; locator errors are
    /// logged and absorbed.
    pub async fn resolve(&self) -> Coordinate {
        if let Some(device) = &self.device {
            match device.locate().await {
                Ok(location) => {
                    tracing::info!("Got location: {}", location);
                    return location;
                }
                Err(error) => {
                    tracing::debug!("Device location unavailable: {}", error);
                }
            }
        }

        let stored = self.prefs.current().location;
        stored.parse().unwrap_or_else(|_| {
            tracing::warn!("Stored location {:?} is malformed, using default", stored);
            Coordinate::OSLO
        })
    }
}
