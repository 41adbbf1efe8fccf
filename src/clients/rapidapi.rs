use crate::clients::catalog::{CatalogClient, CatalogError};
use crate::config::CatalogConfig;
use crate::domain::MovieId;
use crate::models::Movie;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = "movieapp/0.1";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Text(text) => text.trim().parse().ok(),
            Self::Number(number) => number.as_f64(),
        }
    }
}

/// Record shape returned by the IMDb Top 100 service.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMovie {
    id: String,
    #[serde(default)]
    title: String,
    image: Option<String>,
    big_image: Option<String>,
    thumbnail: Option<String>,
    year: Option<TextOrNumber>,
    rating: Option<TextOrNumber>,
    genre: Option<Vec<String>>,
    description: Option<String>,
}

impl RawMovie {
    /// Maps the wire record into a [`Movie`].
    ///
    /// # Errors
    ///
    /// Fails only when the record has no usable identifier.
    pub(crate) fn normalize(self) -> Result<Movie, crate::domain::IdError> {
        let image = [self.image, self.big_image, self.thumbnail]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .unwrap_or_default();

        let rating = self.rating.as_ref().and_then(TextOrNumber::to_f64);

        Ok(Movie {
            id: MovieId::new(&self.id)?,
            title: self.title,
            image,
            year: self.year.map(TextOrNumber::into_text),
            rating,
            genre: self.genre.unwrap_or_default(),
            description: self.description,
        })
    }
}

/// HTTP client for the RapidAPI-hosted movie catalog.
#[derive(Debug, Clone)]
pub struct RapidApiClient {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

impl RapidApiClient {
    /// Builds a client from catalog configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self::with_shared_client(client, config))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    #[must_use]
    pub fn with_shared_client(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_host: config.api_host.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn movie_url(&self, id: &MovieId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    /// GETs `url` and decodes the body, returning it with the response status.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<(T, u16), CatalogError> {
        debug!(url, "Requesting catalog");

        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let decoded = response.json().await.map_err(|e| CatalogError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })?;
        Ok((decoded, status.as_u16()))
    }
}

fn normalize(raw: RawMovie, status: u16) -> Result<Movie, CatalogError> {
    raw.normalize().map_err(|e| CatalogError::Decode {
        status,
        message: e.to_string(),
    })
}

#[async_trait::async_trait]
impl CatalogClient for RapidApiClient {
    async fn top_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}/", self.base_url);
        let (raw, status): (Vec<RawMovie>, _) = self.get_json(&url).await?;

        raw.into_iter().map(|movie| normalize(movie, status)).collect()
    }

    async fn movie_by_id(&self, id: &MovieId) -> Result<Movie, CatalogError> {
        let (raw, status): (RawMovie, _) = self.get_json(&self.movie_url(id)).await?;
        normalize(raw, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Movie {
        serde_json::from_str::<RawMovie>(json)
            .unwrap()
            .normalize()
            .unwrap()
    }

    #[test]
    fn normalizes_full_record() {
        let movie = parse(
            r#"{
                "rank": 1,
                "title": "The Shawshank Redemption",
                "thumbnail": "https://img/thumb.jpg",
                "rating": "9.3",
                "id": "top1",
                "year": 1994,
                "image": "https://img/full.jpg",
                "description": "Two imprisoned men bond.",
                "genre": ["Drama"],
                "imdbid": "tt0111161"
            }"#,
        );

        assert_eq!(movie.id.as_str(), "top1");
        assert_eq!(movie.image, "https://img/full.jpg");
        assert_eq!(movie.year.as_deref(), Some("1994"));
        assert_eq!(movie.rating, Some(9.3));
        assert_eq!(movie.genre, vec!["Drama".to_string()]);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let movie = parse(r#"{"id": "top9", "title": "Untitled", "thumbnail": "t.jpg"}"#);

        assert_eq!(movie.image, "t.jpg");
        assert!(movie.year.is_none());
        assert!(movie.rating.is_none());
        assert!(movie.genre.is_empty());
        assert!(movie.description.is_none());
    }

    #[test]
    fn unparseable_rating_is_dropped() {
        let movie = parse(r#"{"id": "x", "title": "X", "rating": "n/a", "year": "2001"}"#);
        assert!(movie.rating.is_none());
        assert_eq!(movie.year.as_deref(), Some("2001"));
        assert_eq!(movie.image, "");
    }

    #[test]
    fn missing_title_does_not_reject_record() {
        let movie = parse(r#"{"id": "top42", "image": "i.jpg"}"#);
        assert_eq!(movie.id.as_str(), "top42");
        assert_eq!(movie.title, "");

        let list: Vec<RawMovie> =
            serde_json::from_str(r#"[{"id": "a", "title": "A"}, {"id": "b"}]"#).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn blank_id_is_rejected() {
        let raw: RawMovie = serde_json::from_str(r#"{"id": " ", "title": "X"}"#).unwrap();
        assert!(raw.normalize().is_err());
    }

    #[test]
    fn movie_url_encodes_identifier() {
        let config = CatalogConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..CatalogConfig::default()
        };
        let client = RapidApiClient::new(&config).unwrap();
        let id = MovieId::new("top 1/2").unwrap();
        assert_eq!(client.movie_url(&id), "http://localhost:9000/top%201%2F2");
    }
}
