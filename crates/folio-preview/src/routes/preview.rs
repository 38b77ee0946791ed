//! Crawler interception middleware.
//!
//! Wraps every route, including the SPA fallback. Requests the dispatcher
//! claims are answered with a rendered preview; all others continue to the
//! inner service untouched.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::dispatch::Dispatch;
use crate::state::AppState;

/// Intercept crawler requests for blog routes.
pub async fn social_preview(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = state
        .dispatcher
        .dispatch(request.method(), request.uri().path(), request.headers());

    match decision {
        Dispatch::Intercept(preview) => preview.into_response(),
        Dispatch::PassThrough => next.run(request).await,
    }
}
