use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable that overrides `catalog.api_key`.
pub const API_KEY_ENV: &str = "MOVIEAPP_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub catalog: CatalogConfig,

    pub storage: StorageConfig,

    pub favorites: FavoritesConfig,

    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,

    /// Value sent as `X-RapidAPI-Host`.
    pub api_host: String,

    /// Value sent as `X-RapidAPI-Key`.
    pub api_key: String,

    /// Request timeout in seconds. Unset means the transport default.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://imdb-top-100-movies.p.rapidapi.com".to_string(),
            api_host: "imdb-top-100-movies.p.rapidapi.com".to_string(),
            api_key: String::new(),
            request_timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the key-value store.
    pub path: String,

    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let path = dirs::data_dir()
            .map(|dir| dir.join("movieapp").join("storage.json"))
            .unwrap_or_else(|| PathBuf::from("movieapp-storage.json"));

        Self {
            path: path.display().to_string(),
            key_prefix: "movieapp".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Fetch favorite records concurrently instead of one after another.
    /// Either way the first failure aborts the whole list.
    pub concurrent_fetch: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signed-in user; scopes the favorites slot.
    pub email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        let mut config = None;
        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                config = Some(Self::load_from_path(path)?);
                break;
            }
        }

        let mut config = config.unwrap_or_else(|| {
            info!("No config file found, using defaults");
            Self::default()
        });
        config.apply_env();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.catalog.api_key = key.trim().to_string();
        }
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("movieapp").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".movieapp").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            anyhow::bail!("Catalog base URL cannot be empty");
        }

        url::Url::parse(&self.catalog.base_url)
            .with_context(|| format!("Invalid catalog base URL: {}", self.catalog.base_url))?;

        if self.catalog.request_timeout_seconds == Some(0) {
            anyhow::bail!("Catalog request timeout must be > 0 seconds; omit it to disable");
        }

        if self.storage.key_prefix.trim().is_empty() {
            anyhow::bail!("Storage key prefix cannot be empty");
        }

        Ok(())
    }

    /// The signed-in user, with an explicit override taking precedence.
    #[must_use]
    pub fn user<'a>(&'a self, override_email: Option<&'a str>) -> Option<&'a str> {
        override_email
            .or(self.session.email.as_deref())
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.catalog.base_url,
            "https://imdb-top-100-movies.p.rapidapi.com"
        );
        assert!(config.catalog.request_timeout_seconds.is_none());
        assert_eq!(config.storage.key_prefix, "movieapp");
        assert!(!config.favorites.concurrent_fetch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[storage]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [catalog]
            api_key = "secret"
            request_timeout_seconds = 10

            [session]
            email = "ana@example.com"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.api_key, "secret");
        assert_eq!(config.catalog.request_timeout_seconds, Some(10));
        assert_eq!(config.user(None), Some("ana@example.com"));

        assert_eq!(config.catalog.api_host, "imdb-top-100-movies.p.rapidapi.com");
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.catalog.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.catalog.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.catalog.request_timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        config.catalog.request_timeout_seconds = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_user_override() {
        let mut config = Config::default();
        assert_eq!(config.user(None), None);

        config.session.email = Some("ana@example.com".to_string());
        assert_eq!(config.user(Some("bo@example.com")), Some("bo@example.com"));

        config.session.email = Some("   ".to_string());
        assert_eq!(config.user(None), None);
    }

    #[test]
    fn test_save_and_reload() {
        let path =
            std::env::temp_dir().join(format!("movieapp-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.favorites.concurrent_fetch = true;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert!(loaded.favorites.concurrent_fetch);
        let _ = std::fs::remove_file(&path);
    }
}
