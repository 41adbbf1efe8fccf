use std::sync::Arc;

use crate::clients::{CatalogClient, RapidApiClient};
use crate::config::Config;
use crate::favorites::Favorites;
use crate::storage::{JsonFileStore, KeyValueStore, StorageKey};
use crate::views::{DetailView, FavoritesView, FetchMode, ListView};
use tracing::{debug, warn};

/// Everything a command needs: the catalog client and the favorites slot of
/// the current user.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CatalogClient>,
    pub favorites: Favorites,
    pub fetch_mode: FetchMode,
}

impl AppState {
    pub fn from_config(config: &Config, user: Option<&str>) -> anyhow::Result<Self> {
        if config.catalog.api_key.is_empty() {
            warn!(
                "No catalog API key configured; set catalog.api_key or {}",
                crate::config::API_KEY_ENV
            );
        }

        let client: Arc<dyn CatalogClient> = Arc::new(RapidApiClient::new(&config.catalog)?);
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&config.storage.path));

        Ok(Self::new(client, store, config, config.user(user)))
    }

    pub fn new(
        client: Arc<dyn CatalogClient>,
        store: Arc<dyn KeyValueStore>,
        config: &Config,
        user: Option<&str>,
    ) -> Self {
        let key = StorageKey::favorites(&config.storage.key_prefix, user);
        debug!(key = %key, "Using favorites slot");

        Self {
            client,
            favorites: Favorites::new(store, key),
            fetch_mode: FetchMode::from_concurrent(config.favorites.concurrent_fetch),
        }
    }

    #[must_use]
    pub fn list_view(&self) -> ListView {
        ListView::new(self.client.clone())
    }

    #[must_use]
    pub fn detail_view(&self) -> DetailView {
        DetailView::new(self.client.clone())
    }

    #[must_use]
    pub fn favorites_view(&self) -> FavoritesView {
        FavoritesView::new(self.client.clone(), self.favorites.clone(), self.fetch_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::views::testing::FakeCatalog;

    fn state(config: &Config, user: Option<&str>) -> AppState {
        AppState::new(
            Arc::new(FakeCatalog::default()),
            Arc::new(MemoryStore::new()),
            config,
            config.user(user),
        )
    }

    #[test]
    fn favorites_slot_follows_signed_in_user() {
        let mut config = Config::default();
        assert_eq!(state(&config, None).favorites.key(), "movieapp:favs");

        config.session.email = Some("ana@example.com".to_string());
        assert_eq!(
            state(&config, None).favorites.key(),
            "movieapp:favs:ana@example.com"
        );
        assert_eq!(
            state(&config, Some("bo@example.com")).favorites.key(),
            "movieapp:favs:bo@example.com"
        );
    }

    #[test]
    fn fetch_mode_comes_from_config() {
        let mut config = Config::default();
        assert_eq!(state(&config, None).fetch_mode, FetchMode::Sequential);

        config.favorites.concurrent_fetch = true;
        assert_eq!(state(&config, None).fetch_mode, FetchMode::Concurrent);
    }
}
