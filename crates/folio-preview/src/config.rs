//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Public origin of the site. Used for canonical and image URLs when a
    /// request carries no usable `Host` header.
    pub base_url: Url,

    /// Site name shown in `og:site_name`.
    pub site_name: String,

    /// Directory holding the single-page application build. Requests that
    /// are not intercepted are served from here.
    pub static_dir: PathBuf,

    /// Optional JSON post registry replacing the built-in one.
    pub posts_path: Option<PathBuf>,

    /// Additional crawler signatures on top of the defaults.
    pub extra_crawlers: Vec<String>,

    /// Build preview links from `X-Forwarded-Host`/`X-Forwarded-Proto`.
    /// Off unless a proxy in front of the server overwrites those headers.
    pub trust_forwarded: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `FOLIO_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `FOLIO_BASE_URL`: Public origin (default: "http://localhost:8080")
    /// - `FOLIO_SITE_NAME`: Site name (default: "Rohan Nag")
    /// - `FOLIO_STATIC_DIR`: SPA build directory (default: "dist")
    /// - `FOLIO_POSTS_PATH`: JSON post registry file (default: built-in)
    /// - `FOLIO_EXTRA_CRAWLERS`: Comma-separated extra user-agent signatures
    /// - `FOLIO_TRUST_FORWARDED`: Honor forwarded host/proto headers (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("FOLIO_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let base_url_raw = std::env::var("FOLIO_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();
        let base_url = parse_base_url(&base_url_raw)?;

        let site_name =
            std::env::var("FOLIO_SITE_NAME").unwrap_or_else(|_| "Rohan Nag".to_string());

        let static_dir = std::env::var("FOLIO_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dist"));

        let posts_path = std::env::var("FOLIO_POSTS_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let extra_crawlers: Vec<String> = std::env::var("FOLIO_EXTRA_CRAWLERS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let trust_forwarded = std::env::var("FOLIO_TRUST_FORWARDED")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            site_name = %site_name,
            static_dir = %static_dir.display(),
            posts_path = ?posts_path,
            extra_crawlers = extra_crawlers.len(),
            trust_forwarded,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            static_dir,
            posts_path,
            extra_crawlers,
            trust_forwarded,
        })
    }
}

/// Parse and check the configured origin.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
