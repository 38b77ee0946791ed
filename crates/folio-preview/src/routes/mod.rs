//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - everything else - SPA static build, with `index.html` as fallback
//!
//! The social-preview middleware sits in front of all of them.

mod health;
mod preview;

use std::path::Path;

use axum::Router;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

pub use preview::social_preview;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    let spa = spa_service(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .fallback_service(spa)
        .layer(middleware::from_fn_with_state(state.clone(), social_preview))
        .with_state(state)
}

/// Static files from the SPA build. Unknown paths get `index.html` so the
/// client-side router can handle them.
fn spa_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}

/// Serve robots.txt allowing all crawlers.
///
/// We want crawlers to fetch these pages for link previews.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
