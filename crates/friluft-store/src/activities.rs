//! User-chosen activities and their suitability thresholds.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::LocalDb;
use crate::error::{StoreError, StoreResult};

/// An activity the user tracks, with the threshold window the weather
/// suitability checks run against.
///
/// Thresholds are copied from the catalog entry at selection time and
/// owned by the user from then on. `selected` marks favourites, which
/// rank first in recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: i64,
    pub name: String,
    pub max_rain: f64,
    pub max_temp: f64,
    pub max_wind: f64,
    pub min_rain: f64,
    pub min_temp: f64,
    pub min_wind: f64,
    pub selected: bool,
}

/// Validate an activity's threshold window.
///
/// # Errors
/// Returns `StoreError::Validation` if any minimum exceeds its maximum,
/// since such a window can never be satisfied.
pub fn validate_thresholds(activity: &UserActivity) -> StoreResult<()> {
    if activity.min_temp > activity.max_temp {
        return Err(StoreError::validation(format!(
            "Minimum temperature {} exceeds maximum {}",
            activity.min_temp, activity.max_temp
        )));
    }
    if activity.min_wind > activity.max_wind {
        return Err(StoreError::validation(format!(
            "Minimum wind {} exceeds maximum {}",
            activity.min_wind, activity.max_wind
        )));
    }
    if activity.min_rain > activity.max_rain {
        return Err(StoreError::validation(format!(
            "Minimum rain {} exceeds maximum {}",
            activity.min_rain, activity.max_rain
        )));
    }
    Ok(())
}

impl LocalDb {
    /// List all stored activities, ordered by id.
    pub fn list_activities(&self) -> StoreResult<Vec<UserActivity>> {
        let mut stmt = self.conn.prepare(
            "SELECT activity_id, activity_name, max_rain, max_temp, max_wind, min_rain, min_temp, min_wind, selected
             FROM user_activities
             ORDER BY activity_id",
        )?;
        let rows = stmt.query_map([], Self::row_to_activity)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Get a stored activity by id.
    pub fn get_activity(&self, id: i64) -> StoreResult<Option<UserActivity>> {
        let mut stmt = self.conn.prepare(
            "SELECT activity_id, activity_name, max_rain, max_temp, max_wind, min_rain, min_temp, min_wind, selected
             FROM user_activities WHERE activity_id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(Self::row_to_activity(row)?)),
            None => Ok(None),
        }
    }

    /// Insert an activity, replacing any existing row with the same id.
    ///
    /// # Errors
    /// Returns `StoreError::Validation` if a threshold minimum exceeds its
    /// maximum.
    pub fn upsert_activity(&self, activity: &UserActivity) -> StoreResult<()> {
        validate_thresholds(activity)?;

        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO user_activities
                (activity_id, activity_name, max_rain, max_temp, max_wind, min_rain, min_temp, min_wind, selected)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                activity.id,
                activity.name,
                activity.max_rain,
                activity.max_temp,
                activity.max_wind,
                activity.min_rain,
                activity.min_temp,
                activity.min_wind,
                activity.selected as i32,
            ],
        )?;

        tracing::debug!("Upserted activity {} ({})", activity.id, activity.name);
        Ok(())
    }

    /// Replace an existing activity's full row.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no row has the activity's id, and
    /// `StoreError::Validation` if a threshold minimum exceeds its maximum.
    pub fn update_activity(&self, activity: &UserActivity) -> StoreResult<()> {
        validate_thresholds(activity)?;

        let changed = self.conn.execute(
            r#"
            UPDATE user_activities
            SET activity_name = ?2, max_rain = ?3, max_temp = ?4, max_wind = ?5,
                min_rain = ?6, min_temp = ?7, min_wind = ?8, selected = ?9
            WHERE activity_id = ?1
            "#,
            params![
                activity.id,
                activity.name,
                activity.max_rain,
                activity.max_temp,
                activity.max_wind,
                activity.min_rain,
                activity.min_temp,
                activity.min_wind,
                activity.selected as i32,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::not_found(format!("activity {}", activity.id)));
        }

        tracing::debug!("Updated activity {}", activity.id);
        Ok(())
    }

    /// Delete an activity by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no row has the given id.
    pub fn delete_activity(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM user_activities WHERE activity_id = ?1", params![id])?;

        if changed == 0 {
            return Err(StoreError::not_found(format!("activity {}", id)));
        }

        tracing::debug!("Deleted activity {}", id);
        Ok(())
    }

    fn row_to_activity(row: &rusqlite::Row) -> rusqlite::Result<UserActivity> {
        let selected: i32 = row.get(8)?;
        Ok(UserActivity {
            id: row.get(0)?,
            name: row.get(1)?,
            max_rain: row.get(2)?,
            max_temp: row.get(3)?,
            max_wind: row.get(4)?,
            min_rain: row.get(5)?,
            min_temp: row.get(6)?,
            min_wind: row.get(7)?,
            selected: selected != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn running(id: i64) -> UserActivity {
        UserActivity {
            id,
            name: "Running".to_string(),
            max_rain: 10.0,
            max_temp: 30.0,
            max_wind: 5.0,
            min_rain: 0.0,
            min_temp: 15.0,
            min_wind: 0.0,
            selected: true,
        }
    }

    #[test]
    fn test_upsert_and_list() {
        let db = LocalDb::in_memory().unwrap();

        db.upsert_activity(&running(1)).unwrap();
        db.upsert_activity(&running(2)).unwrap();

        let activities = db.list_activities().unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].id, 1);
        assert_eq!(activities[1].id, 2);
        assert!(activities[0].selected);
    }

    #[test]
    fn test_upsert_replaces_existing_row() {
        let db = LocalDb::in_memory().unwrap();

        db.upsert_activity(&running(1)).unwrap();

        let mut replacement = running(1);
        replacement.name = "Trail running".to_string();
        replacement.max_temp = 25.0;
        db.upsert_activity(&replacement).unwrap();

        let activities = db.list_activities().unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Trail running");
        assert_eq!(activities[0].max_temp, 25.0);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = LocalDb::in_memory().unwrap();
        assert!(db.get_activity(42).unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_thresholds() {
        let db = LocalDb::in_memory().unwrap();
        db.upsert_activity(&running(1)).unwrap();

        let mut updated = running(1);
        updated.min_temp = 5.0;
        updated.selected = false;
        db.update_activity(&updated).unwrap();

        let stored = db.get_activity(1).unwrap().unwrap();
        assert_eq!(stored.min_temp, 5.0);
        assert!(!stored.selected);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let db = LocalDb::in_memory().unwrap();
        let result = db.update_activity(&running(99));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_removes_row() {
        let db = LocalDb::in_memory().unwrap();
        db.upsert_activity(&running(1)).unwrap();

        db.delete_activity(1).unwrap();
        assert!(db.list_activities().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let db = LocalDb::in_memory().unwrap();
        let result = db.delete_activity(99);
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_upsert_rejects_inverted_window() {
        let db = LocalDb::in_memory().unwrap();

        let mut inverted = running(1);
        inverted.min_temp = 40.0;
        let result = db.upsert_activity(&inverted);
        assert!(matches!(result, Err(StoreError::Validation(_))));

        let mut inverted = running(1);
        inverted.min_wind = 9.0;
        let result = db.upsert_activity(&inverted);
        assert!(matches!(result, Err(StoreError::Validation(_))));

        let mut inverted = running(1);
        inverted.min_rain = 20.0;
        let result = db.upsert_activity(&inverted);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_update_rejects_inverted_window() {
        let db = LocalDb::in_memory().unwrap();
        db.upsert_activity(&running(1)).unwrap();

        let mut inverted = running(1);
        inverted.min_temp = 40.0;
        let result = db.update_activity(&inverted);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_equal_min_max_is_valid() {
        let mut activity = running(1);
        activity.min_temp = 20.0;
        activity.max_temp = 20.0;
        assert!(validate_thresholds(&activity).is_ok());
    }
}
