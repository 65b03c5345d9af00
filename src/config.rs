//! Configuration management for the studio site core.
//!
//! Configuration is loaded from environment variables (and a `.env` file if
//! present) and injected into the email client and services. The filtering,
//! routing, and phone modules never read it.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for email delivery and content loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider base URL
    pub email_api_url: String,

    /// Email provider API key
    pub email_api_key: String,

    /// Sender used for every outbound message
    pub email_from: String,

    /// Public site URL, linked from confirmation emails
    pub site_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Number of popular tags to show (default: 8)
    pub popular_tag_limit: usize,

    /// Path to the blog posts JSON file, if posts are loaded from disk
    pub blog_posts_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `EMAIL_API_KEY`: API key for the email provider
    ///
    /// Optional environment variables:
    /// - `EMAIL_API_URL`: provider base URL (default: `https://api.resend.com`)
    /// - `EMAIL_FROM`: sender (default: `Brightforge Studio <noreply@brightforge.studio>`)
    /// - `SITE_URL`: public site URL (default: `https://brightforge.studio`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `POPULAR_TAG_LIMIT`: popular tags shown (default: 8)
    /// - `BLOG_POSTS_PATH`: JSON file of blog posts
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let email_api_key = env::var("EMAIL_API_KEY")
            .map_err(|_| ConfigError::MissingVar("EMAIL_API_KEY".to_string()))?;

        if email_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "EMAIL_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let defaults = Config::default();

        let email_api_url = Self::parse_env_url("EMAIL_API_URL", &defaults.email_api_url)?;
        let site_url = Self::parse_env_url("SITE_URL", &defaults.site_url)?;

        let email_from = env::var("EMAIL_FROM").unwrap_or(defaults.email_from);
        if email_from.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "EMAIL_FROM".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let popular_tag_limit =
            Self::parse_env_usize("POPULAR_TAG_LIMIT", defaults.popular_tag_limit)?;

        let blog_posts_path = env::var("BLOG_POSTS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            email_api_url,
            email_api_key,
            email_from,
            site_url,
            request_timeout,
            popular_tag_limit,
            blog_posts_path,
            log_level,
        })
    }

    /// Read an http(s) URL from the environment, falling back to `default`.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(url.trim_end_matches('/').to_string())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email_api_url: "https://api.resend.com".to_string(),
            email_api_key: String::new(),
            email_from: "Brightforge Studio <noreply@brightforge.studio>".to_string(),
            site_url: "https://brightforge.studio".to_string(),
            request_timeout: 10,
            popular_tag_limit: crate::blog::DEFAULT_POPULAR_TAG_LIMIT,
            blog_posts_path: None,
            log_level: "error".to_string(),
        }
    }
}
