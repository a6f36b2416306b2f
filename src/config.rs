//! Site configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_UPSTREAM_URL must be an http(s) URL, got '{0}'")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Base URL of the deployment backend, without a trailing `/`.
    pub api_upstream: Option<String>,
    pub api_timeout_secs: u64,
    /// Overrides the Leptos `site-root` for static assets.
    pub site_root: Option<PathBuf>,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: `/api/*` returns 503 when absent
    /// - `API_TIMEOUT_SECS`: default 30
    /// - `SITE_ROOT`: Leptos `site-root` when absent
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUpstream`] when `API_UPSTREAM_URL` is set
    /// to something other than an `http://` or `https://` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(lookup("PORT"), DEFAULT_PORT);
        let api_timeout_secs = parse_or(lookup("API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS);
        let api_upstream = lookup("API_UPSTREAM_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .map(validate_upstream)
            .transpose()?;
        let site_root = lookup("SITE_ROOT").filter(|s| !s.trim().is_empty()).map(PathBuf::from);

        Ok(Self { port, api_upstream, api_timeout_secs, site_root })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn validate_upstream(url: String) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(ConfigError::InvalidUpstream(url))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
