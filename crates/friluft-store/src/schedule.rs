//! Weekly notification schedule.
//!
//! One row per day of the week, each carrying at most one notification
//! window. Setting a day's window overwrites it wholesale; there is no
//! append.

use chrono::NaiveTime;
use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::LocalDb;
use crate::error::{StoreError, StoreResult};

/// Day labels in storage order, Monday first.
pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A wall-clock notification window, both ends in "HH:MM" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
}

/// One day's row of the weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub day: String,
    pub interval: Option<TimeInterval>,
}

fn parse_time(value: &str) -> StoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| StoreError::validation(format!("Invalid time of day: {}", value)))
}

/// Validate a notification window.
///
/// # Errors
/// Returns `StoreError::Validation` if either end is not a valid "HH:MM"
/// time or the window starts after it ends.
pub fn validate_interval(interval: &TimeInterval) -> StoreResult<()> {
    let start = parse_time(&interval.start)?;
    let end = parse_time(&interval.end)?;
    if start > end {
        return Err(StoreError::validation(format!(
            "Window start {} is after end {}",
            interval.start, interval.end
        )));
    }
    Ok(())
}

impl LocalDb {
    /// Insert the seven blank day rows if the table is not fully seeded.
    ///
    /// Guards on row count == 7, so repeated calls never duplicate rows or
    /// wipe stored windows.
    pub fn seed_week(&self) -> StoreResult<()> {
        let days: i32 = self
            .conn
            .query_row("SELECT COUNT(day) FROM user_times", [], |row| row.get(0))?;
        if days == 7 {
            return Ok(());
        }

        for (id, day) in WEEK_DAYS.iter().enumerate() {
            self.conn.execute(
                "INSERT OR REPLACE INTO user_times (id, day, start_time, end_time) VALUES (?1, ?2, NULL, NULL)",
                params![id as i64, day],
            )?;
        }
        tracing::debug!("Seeded weekly schedule");
        Ok(())
    }

    /// List the full week, Monday first.
    pub fn schedule(&self) -> StoreResult<Vec<ScheduleEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, day, start_time, end_time FROM user_times ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            let start: Option<String> = row.get(2)?;
            let end: Option<String> = row.get(3)?;
            let interval = match (start, end) {
                (Some(start), Some(end)) => Some(TimeInterval { start, end }),
                _ => None,
            };
            Ok(ScheduleEntry {
                id: row.get(0)?,
                day: row.get(1)?,
                interval,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Set a day's notification window, replacing any previous one.
    ///
    /// # Errors
    /// Returns `StoreError::Validation` for a malformed window and
    /// `StoreError::NotFound` for an unknown day label.
    pub fn set_day_interval(&self, day: &str, interval: &TimeInterval) -> StoreResult<()> {
        validate_interval(interval)?;

        let changed = self.conn.execute(
            "UPDATE user_times SET start_time = ?2, end_time = ?3 WHERE day = ?1",
            params![day, interval.start, interval.end],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found(format!("schedule day {}", day)));
        }

        tracing::debug!("Set notification window for {}", day);
        Ok(())
    }

    /// Clear a day's notification window.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown day label.
    pub fn clear_day_interval(&self, day: &str) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE user_times SET start_time = NULL, end_time = NULL WHERE day = ?1",
            params![day],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found(format!("schedule day {}", day)));
        }

        tracing::debug!("Cleared notification window for {}", day);
        Ok(())
    }
}
