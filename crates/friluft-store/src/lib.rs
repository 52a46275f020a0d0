//! Local persistence for the activity recommender.
//!
//! Two storage media live here: a SQLite database holding the user's
//! activities, profile and weekly notification times, and a TOML
//! preferences file for the small key-value settings. [`Store`] wraps
//! the database behind an async facade and broadcasts a change signal
//! after every mutation so derived state can recompute.

pub mod activities;
pub mod db;
pub mod error;
pub mod prefs;
pub mod profile;
pub mod schedule;
pub mod store;

pub use activities::UserActivity;
pub use db::LocalDb;
pub use error::{StoreError, StoreResult};
pub use prefs::{Preferences, PreferencesStore};
pub use profile::UserProfile;
pub use schedule::{ScheduleEntry, TimeInterval, WEEK_DAYS};
pub use store::Store;
