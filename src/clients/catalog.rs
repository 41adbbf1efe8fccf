//! Catalog client abstraction.
//!
//! View controllers only see [`CatalogClient`], so tests and alternative
//! catalog backends can be swapped in without touching the views.

use crate::domain::MovieId;
use crate::models::Movie;
use thiserror::Error;

/// Raw outcome of a failed catalog request.
///
/// The client never translates failures into user-facing text; it keeps
/// enough of the HTTP outcome for [`crate::classify`] to decide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog response ({status}) could not be decoded: {message}")]
    Decode { status: u16, message: String },
}

/// The part of an HTTP response that survives into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseInfo<'a> {
    pub status: u16,
    pub status_text: &'a str,
}

impl CatalogError {
    /// Returns the response the failure carried, if one arrived at all.
    #[must_use]
    pub fn response(&self) -> Option<ResponseInfo<'_>> {
        match self {
            Self::Status {
                status,
                status_text,
            } => Some(ResponseInfo {
                status: *status,
                status_text,
            }),
            Self::Decode { status, .. } => Some(ResponseInfo {
                status: *status,
                status_text: "",
            }),
            Self::Transport(_) => None,
        }
    }

    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }
}

/// Read access to the remote movie catalog.
///
/// # Examples
///
/// ```rust,ignore
/// use movieapp::clients::{CatalogClient, CatalogError};
/// use movieapp::domain::MovieId;
///
/// async fn example(client: &dyn CatalogClient) -> Result<(), CatalogError> {
///     let top = client.top_movies().await?;
///     let first = client.movie_by_id(&top[0].id).await?;
///     println!("{}", first.title);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches the top-N catalog in service order.
    ///
    /// # Errors
    ///
    /// Returns the untranslated [`CatalogError`] for any failed request.
    async fn top_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns the untranslated [`CatalogError`] for any failed request.
    async fn movie_by_id(&self, id: &MovieId) -> Result<Movie, CatalogError>;
}
