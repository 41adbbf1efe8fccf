use super::{Controller, LOADING};
use crate::classify::classify;
use crate::clients::CatalogClient;
use crate::domain::{LoadState, MovieId};
use crate::models::Movie;
use crate::render;
use std::sync::Arc;

pub const NOT_FOUND: &str = "No movie found.";

/// Single-record screen, refetched whenever the requested id changes.
pub struct DetailView {
    client: Arc<dyn CatalogClient>,
    controller: Controller<Movie>,
}

impl DetailView {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            controller: Controller::new("detail"),
        }
    }

    /// Loads `id`. A response for an id that was superseded by a later call
    /// is dropped.
    pub async fn show(&self, id: &MovieId) {
        let ticket = self.controller.begin();
        let outcome = self.client.movie_by_id(id).await.map_err(|e| classify(&e));
        self.controller.settle(ticket, outcome);
    }

    #[must_use]
    pub fn state(&self) -> LoadState<Movie> {
        self.controller.state()
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self.state() {
            LoadState::Loading => format!("{LOADING}\n"),
            LoadState::Errored(message) => format!("{message}\n"),
            LoadState::Loaded(movie) => render::detail(&movie),
            LoadState::Idle => format!("{NOT_FOUND}\n"),
        }
    }
}
