//! Note store client configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the note store base URL.
pub const API_URL_ENV: &str = "SEALNOTE_API_URL";

/// Configuration for the note store client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the note store, without a trailing slash
    /// (e.g., "http://localhost:8080").
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Resolves the base URL from `SEALNOTE_API_URL`, falling back to the
    /// default. The address is never hard-coded at call sites.
    pub fn from_env() -> Self {
        Self::with_env_url(std::env::var(API_URL_ENV).ok())
    }

    /// Applies an environment-provided base URL: unset or empty falls back
    /// to the default, and a trailing slash is trimmed so path joins don't
    /// double up.
    fn with_env_url(url: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = url {
            if !url.is_empty() {
                config.api_base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_local_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn env_url_is_used() {
        let config = ClientConfig::with_env_url(Some("https://notes.example.com".into()));
        assert_eq!(config.api_base_url, "https://notes.example.com");
    }

    #[test]
    fn env_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::with_env_url(Some("https://notes.example.com/".into()));
        assert_eq!(config.api_base_url, "https://notes.example.com");
    }

    #[test]
    fn unset_env_url_falls_back_to_default() {
        let config = ClientConfig::with_env_url(None);
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_env_url_falls_back_to_default() {
        let config = ClientConfig::with_env_url(Some(String::new()));
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }
}
