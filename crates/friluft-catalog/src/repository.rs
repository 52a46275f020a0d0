//! Cached catalog state.

use friluft_core::ApiError;
use tokio::sync::watch;

use crate::client::CatalogClient;
use crate::types::CatalogActivity;

/// Holds the latest fetched catalog behind a watch channel.
pub struct CatalogRepository {
    client: CatalogClient,
    latest: watch::Sender<Vec<CatalogActivity>>,
}

impl CatalogRepository {
    pub fn new(client: CatalogClient) -> Self {
        let (latest, _) = watch::channel(Vec::new());
        Self { client, latest }
    }

    /// Fetch the full catalog and publish it.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let activities = self.client.list().await?;
        tracing::debug!(count = activities.len(), "catalog replaced");
        self.latest.send_replace(activities);
        Ok(())
    }

    /// Latest fetched catalog; empty before the first successful refresh.
    pub fn latest(&self) -> Vec<CatalogActivity> {
        self.latest.borrow().clone()
    }

    /// Observe catalog replacements.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CatalogActivity>> {
        self.latest.subscribe()
    }
}
