//! File-backed user preferences.
//!
//! Four small settings persisted as a TOML document, with a watch
//! channel so screens can react when one changes.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::watch;

use crate::error::{StoreError, StoreResult};

/// The user's settings, with their documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// ISO language code, "en" or "nb".
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether the daily pollen notification is enabled.
    #[serde(default)]
    pub pollen_notification: bool,

    /// True until the user completes first-time setup.
    #[serde(default = "default_first_launch")]
    pub first_launch: bool,

    /// Stored location in "lat, lon" form.
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_first_launch() -> bool {
    true
}

fn default_location() -> String {
    "59.9, 10.75".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: default_language(),
            pollen_notification: false,
            first_launch: default_first_launch(),
            location: default_location(),
        }
    }
}

/// Preferences store backed by a TOML file.
///
/// The in-memory copy under the mutex is the source of truth. Setters
/// write the file before committing, so a failed write leaves the
/// previous value visible to readers and subscribers.
pub struct PreferencesStore {
    path: PathBuf,
    state: Mutex<Preferences>,
    publisher: watch::Sender<Preferences>,
}

impl PreferencesStore {
    /// Load preferences from the given path, falling back to defaults if
    /// the file doesn't exist yet.
    ///
    /// # Errors
    /// Returns `StoreError::Format` if an existing file fails to parse.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let prefs = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents).map_err(|e| StoreError::Format(e.to_string()))?
        } else {
            Preferences::default()
        };

        let (publisher, _) = watch::channel(prefs.clone());
        Ok(Self {
            path,
            state: Mutex::new(prefs),
            publisher,
        })
    }

    /// Snapshot of the current preferences.
    pub fn current(&self) -> Preferences {
        self.state.lock().clone()
    }

    /// Subscribe to preference changes.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.publisher.subscribe()
    }

    /// Set the language preference.
    ///
    /// # Errors
    /// Returns an error if the preferences file cannot be written.
    pub fn set_language(&self, language: &str) -> StoreResult<()> {
        self.update(|prefs| prefs.language = language.to_string())
    }

    /// Enable or disable the daily pollen notification.
    ///
    /// # Errors
    /// Returns an error if the preferences file cannot be written.
    pub fn set_pollen_notification(&self, enabled: bool) -> StoreResult<()> {
        self.update(|prefs| prefs.pollen_notification = enabled)
    }

    /// Set the first-launch flag.
    ///
    /// # Errors
    /// Returns an error if the preferences file cannot be written.
    pub fn set_first_launch(&self, first_launch: bool) -> StoreResult<()> {
        self.update(|prefs| prefs.first_launch = first_launch)
    }

    /// Store a location in "lat, lon" form.
    ///
    /// # Errors
    /// Returns an error if the preferences file cannot be written.
    pub fn set_location(&self, location: &str) -> StoreResult<()> {
        self.update(|prefs| prefs.location = location.to_string())
    }

    fn update(&self, apply: impl FnOnce(&mut Preferences)) -> StoreResult<()> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        apply(&mut next);
        self.persist(&next)?;
        *state = next.clone();
        self.publisher.send_replace(next);
        Ok(())
    }

    fn persist(&self, prefs: &Preferences) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents =
            toml::to_string_pretty(prefs).map_err(|e| StoreError::Format(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
