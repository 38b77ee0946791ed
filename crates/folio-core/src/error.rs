//! Error types for loading and validating blog content.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the post registry.
///
/// All of these surface at startup. Request handling never produces them.
#[derive(Error, Debug)]
pub enum Error {
    /// A post slug is empty or contains characters that are not path-safe.
    #[error("invalid slug '{slug}': {reason}")]
    InvalidSlug {
        /// The offending slug.
        slug: String,
        /// Description of what's wrong.
        reason: &'static str,
    },

    /// Two posts share the same slug.
    #[error("duplicate slug '{0}'")]
    DuplicateSlug(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
