//! Async facade over the SQLite database.

use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

use crate::activities::UserActivity;
use crate::db::LocalDb;
use crate::error::{StoreError, StoreResult};
use crate::profile::UserProfile;
use crate::schedule::{ScheduleEntry, TimeInterval};

/// Async handle to the local database.
///
/// SQLite access is blocking, so every call hops to the blocking pool and
/// serializes through the mutex. Each successful mutation bumps a
/// generation counter; screens subscribe to it to recompute derived state
/// whenever the local data set changes.
#[derive(Clone)]
pub struct Store {
    db: Arc<Mutex<LocalDb>>,
    generation: Arc<watch::Sender<u64>>,
}

async fn run_blocking<T, F>(task: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}

impl Store {
    /// Open (or create) the database at the given path.
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be
    /// created, or the schema fails to initialize.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = LocalDb::open(path)?;
        Ok(Self::from_db(db))
    }

    fn from_db(db: LocalDb) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            db: Arc::new(Mutex::new(db)),
            generation: Arc::new(generation),
        }
    }

    /// Subscribe to the mutation counter.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    fn bump(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }

    /// List all stored activities, ordered by id.
    pub async fn activities(&self) -> StoreResult<Vec<UserActivity>> {
        let db = self.db.clone();
        run_blocking(move || db.lock().list_activities()).await
    }

    /// Get a stored activity by id.
    pub async fn activity(&self, id: i64) -> StoreResult<Option<UserActivity>> {
        let db = self.db.clone();
        run_blocking(move || db.lock().get_activity(id)).await
    }

    /// Insert an activity, replacing any existing row with the same id.
    pub async fn upsert_activity(&self, activity: UserActivity) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().upsert_activity(&activity)).await?;
        self.bump();
        Ok(())
    }

    /// Replace an existing activity's full row.
    pub async fn update_activity(&self, activity: UserActivity) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().update_activity(&activity)).await?;
        self.bump();
        Ok(())
    }

    /// Delete an activity by id.
    pub async fn delete_activity(&self, id: i64) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().delete_activity(id)).await?;
        self.bump();
        Ok(())
    }

    /// Get the stored profile, if one has been seeded.
    pub async fn profile(&self) -> StoreResult<Option<UserProfile>> {
        let db = self.db.clone();
        run_blocking(move || db.lock().profile()).await
    }

    /// Insert a blank profile row if none exists yet.
    pub async fn seed_profile(&self) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().seed_profile()).await?;
        self.bump();
        Ok(())
    }

    /// Replace the profile row.
    pub async fn save_profile(&self, profile: UserProfile) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().save_profile(&profile)).await?;
        self.bump();
        Ok(())
    }

    /// Update only the profile picture reference.
    pub async fn set_profile_picture(&self, picture: Option<String>) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().set_profile_picture(picture.as_deref())).await?;
        self.bump();
        Ok(())
    }

    /// List the full weekly schedule, Monday first.
    pub async fn schedule(&self) -> StoreResult<Vec<ScheduleEntry>> {
        let db = self.db.clone();
        run_blocking(move || db.lock().schedule()).await
    }

    /// Insert the seven blank day rows if the table is not fully seeded.
    pub async fn ensure_week_seeded(&self) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().seed_week()).await?;
        self.bump();
        Ok(())
    }

    /// Set a day's notification window, replacing any previous one.
    pub async fn set_day_interval(&self, day: &str, interval: TimeInterval) -> StoreResult<()> {
        let db = self.db.clone();
        let day = day.to_string();
        run_blocking(move || db.lock().set_day_interval(&day, &interval)).await?;
        self.bump();
        Ok(())
    }

    /// Clear a day's notification window.
    pub async fn clear_day_interval(&self, day: &str) -> StoreResult<()> {
        let db = self.db.clone();
        let day = day.to_string();
        run_blocking(move || db.lock().clear_day_interval(&day)).await?;
        self.bump();
        Ok(())
    }

    /// Delete every row from every table.
    pub async fn clear_all(&self) -> StoreResult<()> {
        let db = self.db.clone();
        run_blocking(move || db.lock().clear_all()).await?;
        self.bump();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn test_store() -> Store {
        Store::from_db(LocalDb::in_memory().expect("in-memory database"))
    }

    fn kayaking() -> UserActivity {
        UserActivity {
            id: 3,
            name: "Kayaking".to_string(),
            max_rain: 5.0,
            max_temp: 28.0,
            max_wind: 8.0,
            min_rain: 0.0,
            min_temp: 10.0,
            min_wind: 0.0,
            selected: false,
        }
    }

    #[tokio::test]
    async fn test_upsert_and_list() {
        let store = test_store();

        store.upsert_activity(kayaking()).await.unwrap();

        let activities = store.activities().await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Kayaking");
    }

    #[tokio::test]
    async fn test_mutations_bump_generation() {
        let store = test_store();
        let mut watcher = store.subscribe_changes();
        assert_eq!(*watcher.borrow_and_update(), 0);

        store.upsert_activity(kayaking()).await.unwrap();
        assert!(watcher.has_changed().unwrap());
        assert_eq!(*watcher.borrow_and_update(), 1);

        store.delete_activity(3).await.unwrap();
        assert_eq!(*watcher.borrow_and_update(), 2);
    }

    #[tokio::test]
    async fn test_reads_do_not_bump_generation() {
        let store = test_store();
        store.upsert_activity(kayaking()).await.unwrap();

        let mut watcher = store.subscribe_changes();
        watcher.mark_unchanged();

        store.activities().await.unwrap();
        store.profile().await.unwrap();
        store.schedule().await.unwrap();

        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_open_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friluft.db");

        {
            let store = Store::open(&path).unwrap();
            store.upsert_activity(kayaking()).await.unwrap();
        }

        let reopened = Store::open(&path).unwrap();
        let activities = reopened.activities().await.unwrap();
        assert_eq!(activities.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_all_resets_tables() {
        let store = test_store();
        store.upsert_activity(kayaking()).await.unwrap();
        store.seed_profile().await.unwrap();
        store.ensure_week_seeded().await.unwrap();

        store.clear_all().await.unwrap();

        assert!(store.activities().await.unwrap().is_empty());
        assert!(store.profile().await.unwrap().is_none());
        assert!(store.schedule().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_schedule_flow_via_facade() {
        let store = test_store();
        store.ensure_week_seeded().await.unwrap();

        let interval = TimeInterval {
            start: "07:00".to_string(),
            end: "09:00".to_string(),
        };
        store.set_day_interval("Tue", interval.clone()).await.unwrap();

        let schedule = store.schedule().await.unwrap();
        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule[1].interval, Some(interval));

        store.clear_day_interval("Tue").await.unwrap();
        let schedule = store.schedule().await.unwrap();
        assert!(schedule[1].interval.is_none());
    }
}
