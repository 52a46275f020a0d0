//! SQLite connection management and schema.
//!
//! `LocalDb` owns the connection; the entity modules ([`crate::activities`],
//! [`crate::profile`], [`crate::schedule`]) add their queries as further
//! `impl LocalDb` blocks.

use rusqlite::Connection;
use std::path::Path;

use crate::error::StoreResult;

/// Handle to the local SQLite database.
pub struct LocalDb {
    pub(crate) conn: Connection,
}

impl LocalDb {
    /// Open (or create) the database at the given path.
    ///
    /// Creates the parent directory and the schema if they don't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    #[cfg(test)]
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS user_activities (
                activity_id INTEGER PRIMARY KEY,
                activity_name TEXT NOT NULL,
                max_rain REAL NOT NULL,
                max_temp REAL NOT NULL,
                max_wind REAL NOT NULL,
                min_rain REAL NOT NULL,
                min_temp REAL NOT NULL,
                min_wind REAL NOT NULL,
                selected INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS user_profile (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                picture TEXT
            );

            CREATE TABLE IF NOT EXISTS user_times (
                id INTEGER PRIMARY KEY,
                day TEXT NOT NULL,
                start_time TEXT,
                end_time TEXT
            );
            "#,
        )?;
        Ok(())
    }

    /// Delete every row from every table.
    ///
    /// Used by the settings reset flow; the schema itself stays in place.
    pub fn clear_all(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            DELETE FROM user_activities;
            DELETE FROM user_profile;
            DELETE FROM user_times;
            "#,
        )?;
        tracing::debug!("Cleared all local tables");
        Ok(())
    }
}
