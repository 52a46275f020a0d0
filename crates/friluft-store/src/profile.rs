//! Single-row user profile.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::LocalDb;
use crate::error::StoreResult;

/// Row id of the one profile the store keeps.
const PROFILE_ID: i64 = 1;

/// The user's profile. The table holds exactly one row, keyed id = 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub picture: Option<String>,
}

impl UserProfile {
    /// Blank profile used when seeding a fresh database.
    pub fn blank() -> Self {
        Self {
            id: PROFILE_ID,
            name: String::new(),
            picture: None,
        }
    }
}

impl LocalDb {
    /// Get the stored profile, if one has been seeded.
    pub fn profile(&self) -> StoreResult<Option<UserProfile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, picture FROM user_profile WHERE id = ?1")?;
        let mut rows = stmt.query(params![PROFILE_ID])?;
        match rows.next()? {
            Some(row) => Ok(Some(UserProfile {
                id: row.get(0)?,
                name: row.get(1)?,
                picture: row.get(2)?,
            })),
            None => Ok(None),
        }
    }

    /// Insert a blank profile row if none exists yet.
    ///
    /// Safe to call on every startup; an existing profile is left alone.
    pub fn seed_profile(&self) -> StoreResult<()> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO user_profile (id, name, picture) VALUES (?1, '', NULL)",
            params![PROFILE_ID],
        )?;
        if inserted > 0 {
            tracing::debug!("Seeded blank user profile");
        }
        Ok(())
    }

    /// Replace the profile row.
    pub fn save_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO user_profile (id, name, picture) VALUES (?1, ?2, ?3)",
            params![PROFILE_ID, profile.name, profile.picture],
        )?;
        tracing::debug!("Saved user profile");
        Ok(())
    }

    /// Update only the profile picture reference.
    pub fn set_profile_picture(&self, picture: Option<&str>) -> StoreResult<()> {
        self.seed_profile()?;
        self.conn.execute(
            "UPDATE user_profile SET picture = ?2 WHERE id = ?1",
            params![PROFILE_ID, picture],
        )?;
        Ok(())
    }
}
