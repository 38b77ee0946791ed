//! Error types for the preview service.
//!
//! Everything here is a startup failure. Once the server is running, every
//! request either passes through or receives a rendered preview, so request
//! handling has no error type of its own.

use thiserror::Error;

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed or is not an absolute http(s) URL.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The configured value.
        value: String,
        /// Description of what's wrong.
        reason: String,
    },
}

/// Failure while assembling the application state.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The post registry could not be loaded.
    #[error("post registry error: {0}")]
    Registry(#[from] folio_core::Error),
}
