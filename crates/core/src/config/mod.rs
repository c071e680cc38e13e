//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (HN_SEARCH_*)
//! 2. TOML config file (if HN_SEARCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (HN_SEARCH_*)
/// 2. TOML config file (if HN_SEARCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the search API, without the `/search` path.
    ///
    /// Set via HN_SEARCH_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hits requested per page.
    ///
    /// Set via HN_SEARCH_HITS_PER_PAGE environment variable.
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,

    /// Query submitted when a session starts.
    ///
    /// Set via HN_SEARCH_DEFAULT_QUERY environment variable.
    #[serde(default)]
    pub default_query: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via HN_SEARCH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via HN_SEARCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://hn.algolia.com/api/v1".into()
}

fn default_hits_per_page() -> u32 {
    20
}

fn default_user_agent() -> String {
    "hn-search/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hits_per_page: default_hits_per_page(),
            default_query: String::new(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `HN_SEARCH_`
    /// 2. TOML file from `HN_SEARCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        tracing::debug!(base_url = %config.base_url, hits_per_page = config.hits_per_page, "configuration loaded");

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("HN_SEARCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("HN_SEARCH_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.hits_per_page, 20);
        assert_eq!(config.default_query, "");
        assert_eq!(config.user_agent, "hn-search/0.1");
        assert_eq!(config.timeout_ms, 20_000);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("HN_SEARCH_HITS_PER_PAGE", "50");
            jail.set_env("HN_SEARCH_DEFAULT_QUERY", "rust");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.hits_per_page, 50);
            assert_eq!(config.default_query, "rust");
            assert_eq!(config.timeout_ms, 20_000);
            Ok(())
        });
    }

    #[test]
    fn test_load_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hn-search.toml",
                r#"
                hits_per_page = 30
                user_agent = "from-file"
                "#,
            )?;
            jail.set_env("HN_SEARCH_CONFIG_FILE", "hn-search.toml");
            jail.set_env("HN_SEARCH_USER_AGENT", "from-env");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.hits_per_page, 30);
            assert_eq!(config.user_agent, "from-env");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("HN_SEARCH_HITS_PER_PAGE", "0");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { ref field, .. }) if field == "hits_per_page"));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unparseable_env() {
        Jail::expect_with(|jail| {
            jail.set_env("HN_SEARCH_TIMEOUT_MS", "soon");

            assert!(matches!(AppConfig::load(), Err(ConfigError::LoadFailed(_))));
            Ok(())
        });
    }
}
