//! Favorite toggling over a [`KeyValueStore`] slot.

use crate::domain::MovieId;
use crate::storage::{KeyValueStore, StorageError};
use std::sync::Arc;
use tracing::info;

/// Computes the list after toggling `id`: every occurrence is removed if
/// present, otherwise `id` is appended.
///
/// # Examples
///
/// ```
/// # use movieapp::domain::MovieId;
/// # use movieapp::favorites::toggle;
/// let m1 = MovieId::new("m1").unwrap();
/// let m2 = MovieId::new("m2").unwrap();
///
/// let added = toggle(&[m1.clone()], &m2);
/// assert_eq!(added, vec![m1.clone(), m2.clone()]);
/// assert_eq!(toggle(&added, &m2), vec![m1]);
/// ```
#[must_use]
pub fn toggle(ids: &[MovieId], id: &MovieId) -> Vec<MovieId> {
    if ids.contains(id) {
        ids.iter().filter(|existing| *existing != id).cloned().collect()
    } else {
        let mut next = ids.to_vec();
        next.push(id.clone());
        next
    }
}

/// One favorites slot. Every write replaces the stored list; concurrent
/// writers are not coordinated and the last write wins.
#[derive(Clone)]
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl Favorites {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ids(&self) -> Result<Vec<MovieId>, StorageError> {
        self.store.load_ids(&self.key)
    }

    pub fn contains(&self, id: &MovieId) -> Result<bool, StorageError> {
        Ok(self.ids()?.contains(id))
    }

    /// Toggles `id` and persists the result. Returns whether `id` is now a
    /// favorite.
    pub fn toggle(&self, id: &MovieId) -> Result<bool, StorageError> {
        let current = self.ids()?;
        let next = toggle(&current, id);
        let now_favorite = next.len() > current.len();

        self.store.save_ids(&self.key, &next)?;
        info!(key = %self.key, movie = %id, favorite = now_favorite, "Favorite toggled");

        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ids(raw: &[&str]) -> Vec<MovieId> {
        raw.iter().map(|id| MovieId::new(id).unwrap()).collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let m3 = MovieId::new("m3").unwrap();
        let start = ids(&["m1", "m2"]);

        let added = toggle(&start, &m3);
        assert_eq!(added, ids(&["m1", "m2", "m3"]));
        assert_eq!(toggle(&added, &m3), start);
    }

    #[test]
    fn toggle_removes_all_duplicates() {
        let m1 = MovieId::new("m1").unwrap();
        assert_eq!(toggle(&ids(&["m1", "m2", "m1"]), &m1), ids(&["m2"]));
    }

    #[test]
    fn double_toggle_restores_persisted_list() {
        let store = Arc::new(MemoryStore::new());
        store.save_ids("movieapp:favs", &ids(&["a", "b"])).unwrap();
        let favorites = Favorites::new(store, "movieapp:favs");

        for raw in ["a", "c"] {
            let id = MovieId::new(raw).unwrap();
            let before = favorites.ids().unwrap();
            favorites.toggle(&id).unwrap();
            favorites.toggle(&id).unwrap();
            let after = favorites.ids().unwrap();
            assert_eq!(
                after.iter().collect::<std::collections::BTreeSet<_>>(),
                before.iter().collect::<std::collections::BTreeSet<_>>()
            );
        }

        // Absent ids come back in the original order as well.
        let favorites = Favorites::new(Arc::new(MemoryStore::new()), "k");
        favorites.toggle(&MovieId::new("a").unwrap()).unwrap();
        favorites.toggle(&MovieId::new("b").unwrap()).unwrap();
        let c = MovieId::new("c").unwrap();
        favorites.toggle(&c).unwrap();
        favorites.toggle(&c).unwrap();
        assert_eq!(favorites.ids().unwrap(), ids(&["a", "b"]));
    }

    #[test]
    fn toggle_reports_new_membership() {
        let favorites = Favorites::new(Arc::new(MemoryStore::new()), "k");
        let id = MovieId::new("top5").unwrap();

        assert!(favorites.toggle(&id).unwrap());
        assert!(favorites.contains(&id).unwrap());
        assert!(!favorites.toggle(&id).unwrap());
        assert!(!favorites.contains(&id).unwrap());
    }
}
