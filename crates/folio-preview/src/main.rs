//! Folio Preview - HTTP server for blog social previews.
//!
//! Serves the portfolio SPA and answers crawler requests for blog routes with
//! server-rendered Open Graph pages.

use std::path::Path;

use axum::Router;
use axum::http::{Request, header};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use folio_preview::{AppState, Config, router};

/// Folio Preview - social previews for the portfolio blog.
#[derive(Parser, Debug)]
#[command(name = "folio-preview")]
#[command(about = "Serves the portfolio SPA with Open Graph previews for crawlers", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dotenv_loaded = load_dotenv(Path::new(&args.dotenv))?;

    init_tracing();
    if dotenv_loaded {
        tracing::info!(path = %args.dotenv, "loaded environment file");
    }

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();
    check_static_dir(&config.static_dir);

    let state = AppState::from_config(config)?;
    let app = with_http_layers(router(state.clone()), state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "preview server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("preview server stopped");
    Ok(())
}

/// Load `path` into the environment if it exists. Returns whether it did.
fn load_dotenv(path: &Path) -> anyhow::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path)?;
    Ok(true)
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Warn when the SPA build is missing; every pass-through request would 404.
fn check_static_dir(static_dir: &Path) {
    let index = static_dir.join("index.html");
    if index.is_file() {
        tracing::info!(static_dir = %static_dir.display(), "serving SPA build");
    } else {
        tracing::warn!(
            static_dir = %static_dir.display(),
            "no index.html in static dir; browsers will get 404s"
        );
    }
}

/// Request tracing and CORS around the preview router.
///
/// Each request span records the matched crawler signature, so preview hits
/// can be told apart from SPA traffic in the logs.
fn with_http_layers(app: Router, state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<_>| {
        let crawler = request
            .headers()
            .get(header::USER_AGENT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .and_then(|ua| {
                state
                    .dispatcher
                    .signatures()
                    .matching(&ua)
                    .map(str::to_string)
            });
        tracing::span!(
            Level::INFO,
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            crawler = crawler.as_deref().unwrap_or("-"),
        )
    });

    app.layer(trace).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
