//! View controllers: the load-state owners behind the list, detail and
//! favorites screens.
//!
//! Each controller runs `Idle -> Loading -> Loaded | Errored` and re-enters
//! `Loading` when its input changes. Outcomes are applied through
//! [`Controller::settle`], which drops responses belonging to a superseded
//! request.

mod detail;
mod favorites;
mod list;

pub use detail::DetailView;
pub use favorites::{FavoritesView, FetchMode};
pub use list::ListView;

use crate::classify::FetchFailure;
use crate::domain::LoadState;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

pub const LOADING: &str = "Loading...";

/// Identifies one request issued by a [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    state: LoadState<T>,
}

#[derive(Debug)]
pub struct Controller<T> {
    name: &'static str,
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> Controller<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(Slot {
                generation: 0,
                state: LoadState::Idle,
            }),
        }
    }

    /// Starts a request: moves to `Loading` and supersedes any request still
    /// in flight.
    pub fn begin(&self) -> Ticket {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.generation += 1;
        slot.state = LoadState::Loading;
        debug!(view = self.name, generation = slot.generation, "Loading");
        Ticket(slot.generation)
    }

    /// Applies an outcome if `ticket` is still the latest request. Returns
    /// whether the outcome was applied.
    pub fn settle(&self, ticket: Ticket, outcome: Result<T, FetchFailure>) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.generation != ticket.0 {
            debug!(
                view = self.name,
                stale = ticket.0,
                current = slot.generation,
                "Discarding stale response"
            );
            return false;
        }

        slot.state = match outcome {
            Ok(data) => LoadState::Loaded(data),
            Err(failure) => {
                warn!(view = self.name, error = %failure, "Fetch failed");
                LoadState::Errored(failure.to_string())
            }
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> LoadState<T> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::clients::{CatalogClient, CatalogError};
    use crate::domain::MovieId;
    use crate::models::Movie;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    pub fn movie(id: &str) -> Movie {
        Movie {
            id: MovieId::new(id).unwrap(),
            title: format!("Movie {id}"),
            image: format!("https://img/{id}.jpg"),
            year: Some("1999".to_string()),
            rating: Some(8.5),
            genre: vec!["Drama".to_string()],
            description: Some(format!("About {id}")),
        }
    }

    /// In-memory catalog with scripted outcomes.
    #[derive(Default)]
    pub struct FakeCatalog {
        pub top: Option<Result<Vec<Movie>, CatalogError>>,
        pub by_id: HashMap<String, Result<Movie, CatalogError>>,
        pub gates: HashMap<String, Arc<Notify>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeCatalog {
        pub fn with_movie(mut self, movie: Movie) -> Self {
            self.by_id.insert(movie.id.to_string(), Ok(movie));
            self
        }

        pub fn with_failure(mut self, id: &str, err: CatalogError) -> Self {
            self.by_id.insert(id.to_string(), Err(err));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CatalogClient for FakeCatalog {
        async fn top_movies(&self) -> Result<Vec<Movie>, CatalogError> {
            self.calls.lock().unwrap().push("top".to_string());
            self.top.clone().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn movie_by_id(&self, id: &MovieId) -> Result<Movie, CatalogError> {
            self.calls.lock().unwrap().push(id.to_string());
            if let Some(gate) = self.gates.get(id.as_str()) {
                gate.notified().await;
            }
            self.by_id
                .get(id.as_str())
                .cloned()
                .unwrap_or_else(|| Err(CatalogError::status(404, "Not Found")))
        }
    }
}
