//! Settings surface: language, pollen notification, reset.

use std::sync::Arc;

use friluft_store::{PreferencesStore, Store, StoreResult};

/// Language pairs the application ships, code then display name.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("nb", "Norsk")];

/// Drives the settings surface.
pub struct SettingsModel {
    store: Store,
    prefs: Arc<PreferencesStore>,
}

impl SettingsModel {
    pub fn new(store: Store, prefs: Arc<PreferencesStore>) -> Self {
        Self { store, prefs }
    }

    /// The stored language code.
    pub fn language(&self) -> String {
        self.prefs.current().language
    }

    /// Display name for the stored language. Unknown codes display as
    /// English.
    pub fn language_display(&self) -> &'static str {
        let code = self.prefs.current().language;
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, display)| *display)
            .unwrap_or(SUPPORTED_LANGUAGES[0].1)
    }

    /// The language pairs offered in the picker.
    pub fn available_languages(&self) -> &'static [(&'static str, &'static str)] {
        &SUPPORTED_LANGUAGES
    }

    /// Store a language code.
    pub fn set_language(&self, code: &str) -> StoreResult<()> {
        self.prefs.set_language(code)
    }

    /// Whether the daily pollen notification is enabled.
    pub fn pollen_notification(&self) -> bool {
        self.prefs.current().pollen_notification
    }

    /// Enable or disable the daily pollen notification.
    pub fn set_pollen_notification(&self, enabled: bool) -> StoreResult<()> {
        self.prefs.set_pollen_notification(enabled)
    }

    /// Wipe the local data set and re-arm the first-launch flow.
    ///
    /// Clears every database table and restores `first_launch`; the
    /// language and location preferences survive a reset.
    pub async fn reset(&self) -> StoreResult<()> {
        self.prefs.set_first_launch(true)?;
        self.store.clear_all().await
    }
}
