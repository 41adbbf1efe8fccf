use super::{Controller, LOADING};
use crate::classify::classify;
use crate::clients::CatalogClient;
use crate::domain::{LoadState, MovieId};
use crate::models::Movie;
use crate::render;
use std::sync::Arc;

pub const HEADING: &str = "Top 100 Movies";

/// Home screen: the catalog's top list, fetched once on mount.
pub struct ListView {
    client: Arc<dyn CatalogClient>,
    controller: Controller<Vec<Movie>>,
}

impl ListView {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            controller: Controller::new("list"),
        }
    }

    pub async fn load(&self) {
        let ticket = self.controller.begin();
        let outcome = self.client.top_movies().await.map_err(|e| classify(&e));
        self.controller.settle(ticket, outcome);
    }

    #[must_use]
    pub fn state(&self) -> LoadState<Vec<Movie>> {
        self.controller.state()
    }

    #[must_use]
    pub fn render(&self, favorite_ids: &[MovieId]) -> String {
        render_grid_state(HEADING, &self.state(), favorite_ids)
    }
}

/// Shared by the list and favorites screens: the heading is always shown,
/// followed by exactly one of loading text, the error or the cards.
pub(super) fn render_grid_state(
    heading: &str,
    state: &LoadState<Vec<Movie>>,
    favorite_ids: &[MovieId],
) -> String {
    match state {
        LoadState::Loading => format!("{heading}\n{LOADING}\n"),
        LoadState::Errored(message) => format!("{heading}\n{message}\n"),
        LoadState::Loaded(movies) => {
            render::grid(heading, movies, |movie| favorite_ids.contains(&movie.id))
        }
        LoadState::Idle => render::grid(heading, &[], |_| false),
    }
}
