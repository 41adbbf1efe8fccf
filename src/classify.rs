//! Maps failed catalog requests to the messages shown in place of data.
//!
//! Every view goes through [`classify`]; there is no other place that turns a
//! [`CatalogError`] into user-facing text.

use crate::clients::CatalogError;
use std::fmt;

pub const RATE_LIMITED: &str = "API Limit Exceeded – Try again later";
pub const BAD_REQUEST: &str = "Bad Request – Please check your request parameters";
pub const NETWORK: &str = "Network Error – Please check your internet connection";

/// User-facing failure category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    RateLimited,
    BadRequest,
    Http { status_text: String },
    Network,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => f.write_str(RATE_LIMITED),
            Self::BadRequest => f.write_str(BAD_REQUEST),
            Self::Http { status_text } if status_text.is_empty() => {
                f.write_str("Error: Unknown error")
            }
            Self::Http { status_text } => write!(f, "Error: {status_text}"),
            Self::Network => f.write_str(NETWORK),
        }
    }
}

/// Classifies a failed request.
///
/// Precedence: 429, then 400, then any other response, then no response.
///
/// # Examples
///
/// ```
/// use movieapp::classify::classify;
/// use movieapp::clients::CatalogError;
///
/// let err = CatalogError::status(503, "Service Unavailable");
/// assert_eq!(classify(&err).to_string(), "Error: Service Unavailable");
/// ```
#[must_use]
pub fn classify(err: &CatalogError) -> FetchFailure {
    match err.response() {
        Some(response) if response.status == 429 => FetchFailure::RateLimited,
        Some(response) if response.status == 400 => FetchFailure::BadRequest,
        Some(response) => FetchFailure::Http {
            status_text: response.status_text.trim().to_string(),
        },
        None => FetchFailure::Network,
    }
}
