use crate::domain::MovieId;
use serde::{Deserialize, Serialize};

/// Normalized catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub image: String,
    pub year: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub genre: Vec<String>,
    pub description: Option<String>,
}
