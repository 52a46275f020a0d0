//! Cached pollen state for the resolved location.

use friluft_core::{ApiError, Coordinate};
use tokio::sync::watch;

use crate::client::PollenClient;
use crate::types::{PollenRegion, RegionLookup};

/// Holds the latest coordinate lookup and region list behind watch channels.
pub struct PollenRepository {
    client: PollenClient,
    lookup: watch::Sender<Option<RegionLookup>>,
    regions: watch::Sender<Vec<PollenRegion>>,
}

impl PollenRepository {
    pub fn new(client: PollenClient) -> Self {
        let (lookup, _) = watch::channel(None);
        let (regions, _) = watch::channel(Vec::new());
        Self {
            client,
            lookup,
            regions,
        }
    }

    /// Fetch and publish the lookup for a coordinate.
    pub async fn refresh(&self, location: Coordinate) -> Result<(), ApiError> {
        let lookup = self.client.lookup(location).await?;
        tracing::debug!(municipality = %lookup.municipality, "pollen lookup replaced");
        self.lookup.send_replace(Some(lookup));
        Ok(())
    }

    /// Fetch and publish the full region list.
    pub async fn refresh_regions(&self) -> Result<(), ApiError> {
        let regions = self.client.regions().await?;
        self.regions.send_replace(regions);
        Ok(())
    }

    /// Latest lookup result, if any refresh has succeeded.
    pub fn current(&self) -> Option<RegionLookup> {
        self.lookup.borrow().clone()
    }

    /// The region entry resolved for the latest lookup.
    pub fn current_region(&self) -> Option<PollenRegion> {
        self.lookup
            .borrow()
            .as_ref()
            .and_then(|l| l.matching_region().cloned())
    }

    /// Latest region list; empty before the first successful refresh.
    pub fn all_regions(&self) -> Vec<PollenRegion> {
        self.regions.borrow().clone()
    }

    /// Observe lookup replacements.
    pub fn subscribe(&self) -> watch::Receiver<Option<RegionLookup>> {
        self.lookup.subscribe()
    }
}
