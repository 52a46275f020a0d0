//! First-launch setup flow.

use std::sync::Arc;

use friluft_catalog::{CatalogActivity, CatalogRepository};
use friluft_store::{
    PreferencesStore, Store, StoreResult, TimeInterval, UserProfile, WEEK_DAYS,
};

use crate::convert::to_user_activity;

/// How many catalog entries the setup flow offers.
pub const SETUP_CATALOG_LIMIT: usize = 10;

/// Drives the one-time setup flow shown on first launch.
///
/// The steps seed the local rows, record a profile name, adopt an initial
/// activity set and optionally one weekly notification window, then clear
/// the first-launch flag so the flow never runs again.
pub struct SetupModel {
    catalog: Arc<CatalogRepository>,
    store: Store,
    prefs: Arc<PreferencesStore>,
}

impl SetupModel {
    pub fn new(catalog: Arc<CatalogRepository>, store: Store, prefs: Arc<PreferencesStore>) -> Self {
        Self {
            catalog,
            store,
            prefs,
        }
    }

    /// Whether the setup flow should run.
    pub fn is_first_launch(&self) -> bool {
        self.prefs.current().first_launch
    }

    /// Seed the blank profile row and the seven schedule rows.
    pub async fn begin(&self) -> StoreResult<()> {
        self.store.seed_profile().await?;
        self.store.ensure_week_seeded().await
    }

    /// The catalog entries offered during setup.
    ///
    /// A failed refresh degrades to whatever is cached, which is empty on
    /// a fresh start.
    pub async fn catalog_slice(&self) -> Vec<CatalogActivity> {
        if let Err(error) = self.catalog.refresh().await {
            tracing::warn!("Catalog refresh failed during setup: {}", error);
        }

        let mut entries = self.catalog.latest();
        entries.truncate(SETUP_CATALOG_LIMIT);
        entries
    }

    /// Record the user's name on the profile row.
    pub async fn set_profile_name(&self, name: &str) -> StoreResult<()> {
        let mut profile = self
            .store
            .profile()
            .await?
            .unwrap_or_else(UserProfile::blank);
        profile.name = name.to_string();
        self.store.save_profile(profile).await
    }

    /// Adopt the chosen catalog entries as selected user activities.
    pub async fn adopt(&self, entries: &[CatalogActivity]) -> StoreResult<usize> {
        for entry in entries {
            self.store
                .upsert_activity(to_user_activity(entry, true))
                .await?;
        }
        Ok(entries.len())
    }

    /// Apply one notification window to all seven days.
    pub async fn apply_weekly_interval(&self, interval: TimeInterval) -> StoreResult<()> {
        for day in WEEK_DAYS {
            self.store.set_day_interval(day, interval.clone()).await?;
        }
        Ok(())
    }

    /// Record the pollen-notification opt-in.
    pub fn set_pollen_notification(&self, enabled: bool) -> StoreResult<()> {
        self.prefs.set_pollen_notification(enabled)
    }

    /// Mark setup as finished.
    pub fn complete(&self) -> StoreResult<()> {
        self.prefs.set_first_launch(false)
    }
}
