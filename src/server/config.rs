use std::time::Duration;

use crate::server::error::config::ConfigError;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CONTENT_LANGUAGE: &str = "TR";
pub const DEFAULT_DEFINITIONS_CACHE_SECONDS: u64 = 3600;

pub struct Config {
    /// Base URL of the hotel API without a trailing slash
    pub api_base_url: String,
    pub hotel_id: String,
    pub api_bearer_token: String,
    /// Currency prices are quoted in
    pub currency: String,
    /// Language sent with price searches
    pub language: String,
    /// Language sent when fetching room definitions and hotel params
    pub content_language: String,
    /// How long room definitions and hotel params are reused before being fetched again
    pub definitions_cache_ttl: Duration,
    /// Optional JSON file overriding the built-in hotel profile
    pub hotel_profile_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str, default: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api_base_url = required("API_BASE_URL")?.trim_end_matches('/').to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "API_BASE_URL".to_string(),
                reason: format!("{:?} is not an http(s) URL", api_base_url),
            });
        }

        let cache_seconds = match lookup("DEFINITIONS_CACHE_SECONDS") {
            Some(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "DEFINITIONS_CACHE_SECONDS".to_string(),
                        reason: e.to_string(),
                    })?
            }
            _ => DEFAULT_DEFINITIONS_CACHE_SECONDS,
        };

        Ok(Self {
            api_base_url,
            hotel_id: required("HOTEL_ID")?,
            api_bearer_token: required("API_BEARER_TOKEN")?,
            currency: optional("API_CURRENCY", DEFAULT_CURRENCY),
            language: optional("API_LANGUAGE", DEFAULT_LANGUAGE),
            content_language: optional("API_CONTENT_LANGUAGE", DEFAULT_CONTENT_LANGUAGE),
            definitions_cache_ttl: Duration::from_secs(cache_seconds),
            hotel_profile_path: lookup("HOTEL_PROFILE_PATH")
                .map(|path| path.trim().to_string())
                .filter(|path| !path.is_empty()),
        })
    }
}
