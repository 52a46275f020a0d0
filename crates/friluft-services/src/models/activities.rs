//! Activity management surface: the user's adopted activities.

use friluft_store::{Store, StoreResult, UserActivity};
use tokio::sync::watch;

/// Drives the activity management surface: list the adopted set, edit an
/// entry's thresholds or selected flag, remove an entry.
pub struct ActivitiesModel {
    store: Store,
}

impl ActivitiesModel {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The user's activities, ordered by id.
    pub async fn list(&self) -> StoreResult<Vec<UserActivity>> {
        self.store.activities().await
    }

    /// One activity by id, for the edit form. `None` when it was removed
    /// in the meantime.
    pub async fn find(&self, id: i64) -> StoreResult<Option<UserActivity>> {
        self.store.activity(id).await
    }

    /// Replace an activity's full row.
    pub async fn update(&self, activity: UserActivity) -> StoreResult<()> {
        self.store.update_activity(activity).await
    }

    /// Remove an activity by id.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.store.delete_activity(id).await
    }

    /// Observe store mutations, to re-query after edits made elsewhere.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.store.subscribe_changes()
    }
}
