// Client configuration.
// Base origin, cache freshness window, user agent, and request timeout.

use std::time::Duration;

use crate::error::{Result, TrendyError};

/// Origin every trending URL and relative link is resolved against.
pub const GITHUB_URL: &str = "https://github.com";

/// Cached lists are reused for 6 hours.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(6 * 3600);

const ENV_BASE_URL: &str = "TRENDY_BASE_URL";
const ENV_CACHE_TTL: &str = "TRENDY_CACHE_TTL_SECS";
const ENV_USER_AGENT: &str = "TRENDY_USER_AGENT";
const ENV_TIMEOUT: &str = "TRENDY_TIMEOUT_SECS";

/// Settings for a [`TrendingClient`](crate::github::TrendingClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingConfig {
    /// Origin without a trailing slash, e.g. `https://github.com`.
    pub base_url: String,
    /// How long a cached list stays valid.
    pub freshness: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves reqwest's defaults in charge.
    pub timeout: Option<Duration>,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_URL.to_string(),
            freshness: DEFAULT_FRESHNESS,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

impl TrendingConfig {
    /// Build a config from `TRENDY_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(&base_url);
        }
        if let Some(secs) = lookup(ENV_CACHE_TTL) {
            config.freshness = Duration::from_secs(parse_secs(ENV_CACHE_TTL, &secs)?);
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT) {
            config.timeout = Some(Duration::from_secs(parse_secs(ENV_TIMEOUT, &secs)?));
        }

        Ok(config)
    }

    /// Replace the origin, dropping any trailing slash.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }
}

fn default_user_agent() -> String {
    format!("trendy/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        TrendyError::Config(format!(
            "{} must be a whole number of seconds, got {:?}",
            key, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrendingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "https://github.com");
        assert_eq!(config.freshness, Duration::from_secs(21_600));
        assert!(config.user_agent.starts_with("trendy/"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = TrendingConfig::from_lookup(lookup_from(&[
            ("TRENDY_BASE_URL", "http://127.0.0.1:8080/"),
            ("TRENDY_CACHE_TTL_SECS", "60"),
            ("TRENDY_USER_AGENT", "tester"),
            ("TRENDY_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.freshness, Duration::from_secs(60));
        assert_eq!(config.user_agent, "tester");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_ttl_is_config_error() {
        let err =
            TrendingConfig::from_lookup(lookup_from(&[("TRENDY_CACHE_TTL_SECS", "six hours")]))
                .unwrap_err();
        assert!(matches!(err, TrendyError::Config(_)));
    }
}
