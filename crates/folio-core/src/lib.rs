//! Core types for the folio social-preview service.
//!
//! This crate provides:
//! - Blog post metadata and the post registry loaded once at startup
//! - The crawler signature set and user-agent classification
//! - Shared error types
//!
//! Nothing here touches HTTP; the preview server in `folio-preview` builds on
//! these types.

pub mod crawler;
mod error;
pub mod post;
pub mod registry;

pub use crawler::{CrawlerSignatures, is_crawler};
pub use error::{Error, Result};
pub use post::{BlogIndex, PostMetadata};
pub use registry::{PostRegistry, PostSource};
