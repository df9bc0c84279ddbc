use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::API_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub api: ApiConfig,
    pub http: HttpConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the API, e.g. https://swapi.dev/api
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Append every API call to this file when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_log_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Most pages a single collection walk may request
    pub max_pages: u32,
}

/// Command-line values that win over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_pages: Option<u32>,
    pub api_log_path: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut RosterConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.http.timeout_seconds = timeout;
        }
        if let Some(max_pages) = self.max_pages {
            config.pagination.max_pages = max_pages;
        }
        if let Some(api_log) = &self.api_log_path {
            config.http.api_log_path = Some(api_log.clone());
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: API_BASE_URL.to_string(),
            },
            http: HttpConfig {
                timeout_seconds: 30,
                api_log_path: None,
            },
            pagination: PaginationConfig { max_pages: 100 },
        }
    }
}

impl ApiConfig {
    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), collection)
    }

    pub fn starships_url(&self) -> String {
        self.collection_url("starships")
    }

    /// Every pilot reference must live under this prefix
    pub fn people_url(&self) -> String {
        self.collection_url("people")
    }
}

impl RosterConfig {
    /// Load configuration from a TOML file
    pub fn load(config_path: &str) -> Result<Self> {
        tracing::info!("📋 Loading configuration from {}", config_path);
        let config_str = fs::read_to_string(config_path)?;
        let config: RosterConfig = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(config_path: &str) -> Result<Self> {
        if Path::new(config_path).exists() {
            Self::load(config_path)
        } else {
            tracing::debug!("no configuration at {}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// File (or defaults) with overrides applied, validated
    pub fn resolve(config_path: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = Self::load_or_default(config_path)?;
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(RosterError::Config("api.base_url must not be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RosterError::Config(format!(
                "api.base_url must be an http(s) URL, got {}",
                base_url
            )));
        }

        if self.http.timeout_seconds == 0 {
            return Err(RosterError::Config("http.timeout_seconds must be greater than 0".to_string()));
        }
        if self.pagination.max_pages == 0 {
            return Err(RosterError::Config("pagination.max_pages must be greater than 0".to_string()));
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Configuration Summary:");
        tracing::info!("   🌐 Starships: {}", self.api.starships_url());
        tracing::info!("   👤 People: {}", self.api.people_url());
        tracing::info!("   ⏰ Request timeout: {}s", self.http.timeout_seconds);
        tracing::info!("   📄 Page cap: {}", self.pagination.max_pages);
        if let Some(path) = &self.http.api_log_path {
            tracing::info!("   📝 API log: {}", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_urls_ignore_trailing_slash() {
        let mut config = RosterConfig::default();
        assert_eq!(config.api.starships_url(), "https://swapi.dev/api/starships/");

        config.api.base_url = "http://localhost:8000/api/".to_string();
        assert_eq!(config.api.people_url(), "http://localhost:8000/api/people/");
    }

    #[test]
    fn defaults_are_valid() {
        assert!(RosterConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout_and_bad_scheme() {
        let mut config = RosterConfig::default();
        config.http.timeout_seconds = 0;
        assert!(matches!(config.validate(), Err(RosterError::Config(_))));

        let mut config = RosterConfig::default();
        config.api.base_url = "swapi.dev/api".to_string();
        assert!(matches!(config.validate(), Err(RosterError::Config(_))));

        let mut config = RosterConfig::default();
        config.pagination.max_pages = 0;
        assert!(matches!(config.validate(), Err(RosterError::Config(_))));
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("roster.toml");
        let path = path.to_str().unwrap();

        let mut config = RosterConfig::default();
        config.pagination.max_pages = 7;
        config.http.api_log_path = Some("api_debug.log".to_string());
        config.save(path).unwrap();

        let loaded = RosterConfig::load(path).unwrap();
        assert_eq!(loaded.pagination.max_pages, 7);
        assert_eq!(loaded.http.api_log_path.as_deref(), Some("api_debug.log"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = RosterConfig::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, API_BASE_URL);
    }

    #[test]
    fn malformed_file_is_a_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = RosterConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RosterError::TomlDe(_)), "got {:?}", err);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        let path = path.to_str().unwrap();

        let mut on_disk = RosterConfig::default();
        on_disk.api.base_url = "http://file.example/api".to_string();
        on_disk.http.timeout_seconds = 60;
        on_disk.pagination.max_pages = 50;
        on_disk.save(path).unwrap();

        let overrides = ConfigOverrides {
            base_url: Some("http://cli.example/api".to_string()),
            timeout_seconds: Some(5),
            max_pages: None,
            api_log_path: Some("calls.log".to_string()),
        };
        let config = RosterConfig::resolve(path, &overrides).unwrap();

        assert_eq!(config.api.base_url, "http://cli.example/api");
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.pagination.max_pages, 50);
        assert_eq!(config.http.api_log_path.as_deref(), Some("calls.log"));
    }

    #[test]
    fn invalid_override_fails_validation() {
        let overrides = ConfigOverrides {
            max_pages: Some(0),
            ..ConfigOverrides::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = RosterConfig::resolve(path.to_str().unwrap(), &overrides).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }
}
