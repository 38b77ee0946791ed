//! Folio Preview - social-media previews for the portfolio blog.
//!
//! This crate provides a lightweight HTTP server placed in front of the
//! portfolio's single-page application. Link unfurlers and search crawlers do
//! not run the SPA's scripts, so for blog URLs they receive a server-rendered
//! page carrying Open Graph and Twitter Card metadata instead. Everyone else
//! gets the SPA untouched.
//!
//! # Architecture
//!
//! - **Registry**: post metadata from `folio-core`, loaded once at startup
//! - **Classify**: user-agent substring match against the crawler signatures
//! - **Render**: HTML with Open Graph tags using maud (compile-time templates)
//! - **Dispatch**: axum middleware that intercepts or passes through
//!
//! # URL Pattern
//!
//! ```text
//! GET /blog          -> blog index preview (crawlers only)
//! GET /blog/{slug}   -> post preview (crawlers only, registered slugs only)
//! GET /*             -> static SPA build
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Image URLs are resolved against the request origin and must be http(s)
//! - Strict Content-Security-Policy on previews: inline script only

pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use dispatch::{Dispatch, Dispatcher};
pub use error::{ConfigError, PreviewError};
pub use routes::router;
pub use state::AppState;
