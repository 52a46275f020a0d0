//! Explore surface: adopt new activities from the remote catalog.

use std::sync::Arc;

use friluft_catalog::{CatalogActivity, CatalogRepository};
use friluft_store::{Store, StoreResult};
use parking_lot::Mutex;

use crate::convert::to_user_activity;

/// Drives the explore surface.
///
/// The surface offers the remote catalog minus the activities the user
/// already has, and collects picks into a basket that is committed in one
/// step.
pub struct ExploreModel {
    catalog: Arc<CatalogRepository>,
    store: Store,
    selection: Mutex<Vec<CatalogActivity>>,
}

impl ExploreModel {
    pub fn new(catalog: Arc<CatalogRepository>, store: Store) -> Self {
        Self {
            catalog,
            store,
            selection: Mutex::new(Vec::new()),
        }
    }

    /// Catalog entries the user has not adopted yet, by activity id.
    ///
    /// A failed catalog refresh falls back to the last fetched list, which
    /// is empty before the first success.
    pub async fn available(&self) -> StoreResult<Vec<CatalogActivity>> {
        if let Err(error) = self.catalog.refresh().await {
            tracing::warn!("Catalog refresh failed: {}", error);
        }

        let owned: Vec<i64> = self
            .store
            .activities()
            .await?
            .iter()
            .map(|activity| activity.id)
            .collect();

        Ok(self
            .catalog
            .latest()
            .into_iter()
            .filter(|entry| !owned.contains(&entry.id))
            .collect())
    }

    /// Add a catalog entry to the basket. Adding the same id twice keeps
    /// one copy.
    pub fn add_selection(&self, entry: CatalogActivity) {
        let mut selection = self.selection.lock();
        if !selection.iter().any(|picked| picked.id == entry.id) {
            selection.push(entry);
        }
    }

    /// Remove a basket entry by activity id.
    pub fn remove_selection(&self, id: i64) {
        self.selection.lock().retain(|picked| picked.id != id);
    }

    /// Snapshot of the basket.
    pub fn selection(&self) -> Vec<CatalogActivity> {
        self.selection.lock().clone()
    }

    /// Adopt every basket entry as a selected user activity.
    ///
    /// Thresholds are copied verbatim from the catalog. The basket is
    /// cleared only after every upsert succeeds, so a failed commit can be
    /// retried.
    pub async fn commit_selection(&self) -> StoreResult<usize> {
        let picked = self.selection.lock().clone();

        for entry in &picked {
            self.store
                .upsert_activity(to_user_activity(entry, true))
                .await?;
        }

        self.selection.lock().clear();
        tracing::debug!(count = picked.len(), "catalog selection committed");
        Ok(picked.len())
    }
}
