//! Everything a command needs: config, catalog, persisted state, app state.

use std::path::Path;

use anyhow::{Context as _, Result};

use careerguide_core::app::{AppState, Page};
use careerguide_core::catalog::Catalog;
use careerguide_core::likes::LikedItems;
use careerguide_core::model::Profile;
use careerguide_store::{
    load_config_from, AppStore, CareerGuideConfig, JsonFileStore, StoreError,
};

pub struct Context {
    pub config: CareerGuideConfig,
    pub catalog: Catalog,
    pub store: AppStore<JsonFileStore>,
    pub state: AppState,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(config_path, false)
    }

    /// Like [`Context::load`], but an unreadable stored profile counts as
    /// signed out. Used by `login` and `logout`, which replace or clear it.
    pub fn load_for_sign_in(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(config_path, true)
    }

    fn load_with(config_path: Option<&Path>, skip_corrupt_profile: bool) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let catalog = config.load_catalog().context("failed to load catalog")?;
        let store = AppStore::new(JsonFileStore::new(config.state_path()));

        let user = match store.load_profile() {
            Err(StoreError::Corrupt { key, source }) if skip_corrupt_profile => {
                tracing::warn!(%key, error = %source, "ignoring unreadable profile");
                None
            }
            other => other.context("failed to load profile")?,
        };
        let likes = match &user {
            Some(profile) => store.load_likes(&profile.name)?,
            None => LikedItems::default(),
        };

        Ok(Self {
            config,
            catalog,
            store,
            state: AppState::restore(user, likes),
        })
    }

    /// Move to `page`, returning the signed-in profile.
    pub fn enter(&mut self, page: Page) -> Result<Profile> {
        self.state = std::mem::take(&mut self.state).navigate(page);
        match self.state.user() {
            Some(profile) => Ok(profile.clone()),
            None => anyhow::bail!(
                "not signed in. Run `careerguide login --name <NAME> --location <PLACE> --gender <GENDER> --category <CATEGORY>` first"
            ),
        }
    }

    /// Write the current user's likes back to the store.
    pub fn save_likes(&mut self) -> Result<()> {
        if let Some(profile) = self.state.user() {
            self.store
                .save_likes(&profile.name, self.state.likes())
                .context("failed to save liked items")?;
        }
        Ok(())
    }
}
