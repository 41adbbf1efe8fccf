//! Domain primitives for the movie catalog.
//!
//! Identifiers coming from the remote catalog and from persisted favorites are
//! wrapped in [`MovieId`] so a raw string never flows into a request path or a
//! storage slot unchecked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Movie ID cannot be empty")]
    Empty,
}

/// Unique identifier for a catalog entry (e.g. `top1`).
///
/// # Examples
///
/// ```rust
/// use movieapp::domain::MovieId;
///
/// let id: MovieId = "top7".parse().unwrap();
/// assert_eq!(id.as_str(), "top7");
/// assert!("   ".parse::<MovieId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a new `MovieId`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Empty`] when nothing is left after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MovieId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Load state owned by a view controller.
///
/// `Idle` until the first fetch starts, `Loading` while one is in flight and
/// one of the two terminal states afterwards. Terminal states are re-entered
/// whenever the triggering input changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> LoadState<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }
}
