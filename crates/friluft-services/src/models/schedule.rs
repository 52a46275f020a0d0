//! Weekly notification schedule surface.

use friluft_store::{ScheduleEntry, Store, StoreResult, TimeInterval};

/// Drives the weekly schedule surface.
pub struct ScheduleModel {
    store: Store,
}

impl ScheduleModel {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Make sure the seven day rows exist.
    pub async fn ensure_seeded(&self) -> StoreResult<()> {
        self.store.ensure_week_seeded().await
    }

    /// The full week, Monday first.
    pub async fn week(&self) -> StoreResult<Vec<ScheduleEntry>> {
        self.store.schedule().await
    }

    /// Set a day's notification window.
    pub async fn set_day(&self, day: &str, interval: TimeInterval) -> StoreResult<()> {
        self.store.set_day_interval(day, interval).await
    }

    /// Clear a day's notification window.
    pub async fn clear_day(&self, day: &str) -> StoreResult<()> {
        self.store.clear_day_interval(day).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use friluft_store::StoreError;

    fn model() -> (tempfile::TempDir, ScheduleModel) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("friluft.db")).unwrap();
        (dir, ScheduleModel::new(store))
    }

    #[tokio::test]
    async fn test_week_starts_blank_after_seeding() {
        let (_dir, model) = model();
        model.ensure_seeded().await.unwrap();

        let week = model.week().await.unwrap();
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|day| day.interval.is_none()));
    }

    #[tokio::test]
    async fn test_set_and_clear_round_trip() {
        let (_dir, model) = model();
        model.ensure_seeded().await.unwrap();

        let window = TimeInterval {
            start: "06:30".to_string(),
            end: "08:00".to_string(),
        };
        model.set_day("Fri", window.clone()).await.unwrap();
        assert_eq!(model.week().await.unwrap()[4].interval, Some(window));

        model.clear_day("Fri").await.unwrap();
        assert!(model.week().await.unwrap()[4].interval.is_none());
    }

    #[tokio::test]
    async fn test_invalid_window_propagates_validation() {
        let (_dir, model) = model();
        model.ensure_seeded().await.unwrap();

        let backwards = TimeInterval {
            start: "20:00".to_string(),
            end: "07:00".to_string(),
        };
        let result = model.set_day("Mon", backwards).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
