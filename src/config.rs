//! Endpoint configuration resolved from the environment with local-dev
//! defaults. The CSRF priming URL is configured separately because it lives
//! outside the API base prefix and must stay reachable on its own.

use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_CSRF_URL: &str = "http://127.0.0.1:8000/sanctum/csrf-cookie";

pub const API_BASE_URL_VAR: &str = "MADRASATI_API_BASE_URL";
pub const CSRF_URL_VAR: &str = "MADRASATI_CSRF_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub csrf_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>, csrf_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            csrf_url: csrf_url.into(),
        }
    }

    /// Reads endpoints from the environment; blank or unset values fall back
    /// to the local-dev defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base_url: env_or(API_BASE_URL_VAR, DEFAULT_API_BASE_URL),
            csrf_url: env_or(CSRF_URL_VAR, DEFAULT_CSRF_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_CSRF_URL)
    }
}

fn env_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(_) => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_uses_defaults_when_unset() {
        temp_env::with_vars(
            [
                (API_BASE_URL_VAR, None::<String>),
                (CSRF_URL_VAR, None::<String>),
            ],
            || {
                let config = ApiConfig::from_env();
                assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
                assert_eq!(config.csrf_url, DEFAULT_CSRF_URL);
            },
        );
    }

    #[test]
    fn from_env_reads_and_trims_values() {
        temp_env::with_vars(
            [
                (API_BASE_URL_VAR, Some(" https://api.madrasati.app/api ")),
                (CSRF_URL_VAR, Some("https://api.madrasati.app/sanctum/csrf-cookie")),
            ],
            || {
                let config = ApiConfig::from_env();
                assert_eq!(config.api_base_url, "https://api.madrasati.app/api");
                assert_eq!(
                    config.csrf_url,
                    "https://api.madrasati.app/sanctum/csrf-cookie"
                );
            },
        );
    }

    #[test]
    fn from_env_treats_blank_as_unset() {
        temp_env::with_vars([(API_BASE_URL_VAR, Some("   "))], || {
            let config = ApiConfig::from_env();
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        });
    }
}
