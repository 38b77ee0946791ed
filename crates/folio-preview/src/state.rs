//! Application state shared across all request handlers.

use std::sync::Arc;

use folio_core::{CrawlerSignatures, PostRegistry, PostSource};

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::PreviewError;

/// Shared application state available to all request handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Crawler dispatch context (registry, signatures, fallback origin).
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create application state from configuration and an already loaded registry.
    pub fn new(config: Config, registry: Arc<dyn PostSource>) -> Self {
        let signatures = CrawlerSignatures::default().with_extra(config.extra_crawlers.iter());

        tracing::info!(
            posts = registry.list_all().len(),
            crawler_signatures = signatures.len(),
            "application state initialized"
        );

        let dispatcher = Dispatcher::new(
            registry,
            signatures,
            config.base_url.clone(),
            config.site_name.clone(),
        )
        .trust_forwarded(config.trust_forwarded);

        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Create application state, loading the post registry named by `config`
    /// (or the built-in one).
    pub fn from_config(config: Config) -> Result<Self, PreviewError> {
        let registry = match &config.posts_path {
            Some(path) => PostRegistry::from_path(path)?,
            None => PostRegistry::builtin()?,
        };
        Ok(Self::new(config, Arc::new(registry)))
    }
}
