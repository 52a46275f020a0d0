//! Profile surface: the user's name and picture.

use friluft_store::{Store, StoreResult, UserProfile};

/// Drives the profile surface.
pub struct ProfileModel {
    store: Store,
}

impl ProfileModel {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The stored profile, seeding the blank row first if the database is
    /// fresh.
    pub async fn profile(&self) -> StoreResult<UserProfile> {
        self.store.seed_profile().await?;
        Ok(self
            .store
            .profile()
            .await?
            .unwrap_or_else(UserProfile::blank))
    }

    /// Record a new display name.
    pub async fn set_name(&self, name: &str) -> StoreResult<()> {
        let mut profile = self.profile().await?;
        profile.name = name.to_string();
        self.store.save_profile(profile).await
    }

    /// Record or clear the picture reference.
    pub async fn set_picture(&self, picture: Option<String>) -> StoreResult<()> {
        self.store.set_profile_picture(picture).await
    }
}
