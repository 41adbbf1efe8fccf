use super::Controller;
use super::list::render_grid_state;
use crate::classify::classify;
use crate::clients::{CatalogClient, CatalogError};
use crate::domain::{LoadState, MovieId};
use crate::favorites::Favorites;
use crate::models::Movie;
use crate::storage::StorageError;
use std::sync::Arc;
use tracing::debug;

pub const HEADING: &str = "Your Favorites";

/// How favorite records are fetched. Both modes abort on the first failure
/// and never show a partial list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One request at a time, in stored order.
    #[default]
    Sequential,
    /// All requests in flight at once, results kept in stored order.
    Concurrent,
}

impl FetchMode {
    #[must_use]
    pub const fn from_concurrent(concurrent: bool) -> Self {
        if concurrent {
            Self::Concurrent
        } else {
            Self::Sequential
        }
    }
}

/// Favorites screen: reads the identifier list, then fetches every record.
pub struct FavoritesView {
    client: Arc<dyn CatalogClient>,
    favorites: Favorites,
    mode: FetchMode,
    controller: Controller<Vec<Movie>>,
}

impl FavoritesView {
    pub fn new(client: Arc<dyn CatalogClient>, favorites: Favorites, mode: FetchMode) -> Self {
        Self {
            client,
            favorites,
            mode,
            controller: Controller::new("favorites"),
        }
    }

    /// Reloads the list. Storage failures are returned to the caller; catalog
    /// failures end in the `Errored` state.
    pub async fn load(&self) -> Result<(), StorageError> {
        let ids = self.favorites.ids()?;
        let ticket = self.controller.begin();

        if ids.is_empty() {
            self.controller.settle(ticket, Ok(Vec::new()));
            return Ok(());
        }

        debug!(count = ids.len(), mode = ?self.mode, "Fetching favorites");
        let outcome = match self.mode {
            FetchMode::Sequential => self.fetch_sequential(&ids).await,
            FetchMode::Concurrent => {
                futures::future::try_join_all(ids.iter().map(|id| self.client.movie_by_id(id)))
                    .await
            }
        };

        self.controller
            .settle(ticket, outcome.map_err(|e| classify(&e)));
        Ok(())
    }

    async fn fetch_sequential(&self, ids: &[MovieId]) -> Result<Vec<Movie>, CatalogError> {
        let mut movies = Vec::with_capacity(ids.len());
        for id in ids {
            movies.push(self.client.movie_by_id(id).await?);
        }
        Ok(movies)
    }

    #[must_use]
    pub fn state(&self) -> LoadState<Vec<Movie>> {
        self.controller.state()
    }

    /// Every card on this screen is a favorite.
    #[must_use]
    pub fn render(&self) -> String {
        let state = self.state();
        let ids: Vec<MovieId> = state
            .data()
            .map(|movies| movies.iter().map(|m| m.id.clone()).collect())
            .unwrap_or_default();
        render_grid_state(HEADING, &state, &ids)
    }
}
