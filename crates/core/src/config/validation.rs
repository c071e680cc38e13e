//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Largest page size the search API accepts.
pub const MAX_HITS_PER_PAGE: u32 = 1000;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `base_url` is not an absolute http(s) URL
    /// - `hits_per_page` is 0 or exceeds 1000
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "base_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "base_url".into(), reason: e.to_string() });
            }
        }

        if self.hits_per_page == 0 {
            return Err(ConfigError::Invalid { field: "hits_per_page".into(), reason: "must be greater than 0".into() });
        }
        if self.hits_per_page > MAX_HITS_PER_PAGE {
            return Err(ConfigError::Invalid {
                field: "hits_per_page".into(),
                reason: format!("must not exceed {MAX_HITS_PER_PAGE}"),
            });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.default_query.trim() != self.default_query {
            tracing::warn!(
                default_query = %self.default_query,
                "default_query has surrounding whitespace; it is used as an exact cache key"
            );
        }

        Ok(())
    }
}
