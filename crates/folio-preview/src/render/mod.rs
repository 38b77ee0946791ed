//! HTML rendering for social previews.
//!
//! Two documents exist: a per-post article preview and a blog index preview.
//! Both are complete HTML pages carrying Open Graph and Twitter Card tags plus
//! a small readable body.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).
//! Output depends only on the inputs, so rendering the same post for the same
//! origin always yields identical bytes.

pub mod components;
pub mod index;
pub mod post;

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

pub use index::render_index;
pub use post::render_post;

/// Cache policy for intercepted responses.
pub const CACHE_CONTROL: &str = "public, max-age=3600, stale-while-revalidate=86400";

/// A rendered preview document, ready to be sent as the full response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPreview {
    /// Complete HTML document.
    pub html: String,
}

impl RenderedPreview {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    /// Response headers for this document.
    ///
    /// Besides content type and cache policy, the response varies by user
    /// agent so shared caches never hand a crawler's copy to a browser that
    /// would have passed through.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
        headers.insert(header::VARY, HeaderValue::from_static("User-Agent"));

        // Security headers
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(components::CSP_HEADER),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );

        // ETag (xxHash of content)
        if let Ok(val) = HeaderValue::from_str(&self.etag()) {
            headers.insert(header::ETAG, val);
        }

        headers
    }

    /// Strong ETag derived from the document bytes.
    pub fn etag(&self) -> String {
        let hash = xxhash_rust::xxh3::xxh3_64(self.html.as_bytes());
        format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()))
    }
}

impl IntoResponse for RenderedPreview {
    fn into_response(self) -> Response {
        let headers = self.headers();
        (StatusCode::OK, headers, self.html).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_include_cache_and_content_type() {
        let preview = RenderedPreview::new("<!DOCTYPE html><html></html>".to_string());
        let headers = preview.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600, stale-while-revalidate=86400"
        );
        assert_eq!(headers.get(header::VARY).unwrap(), "User-Agent");
        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
    }

    #[test]
    fn csp_allows_same_origin_images() {
        let headers = RenderedPreview::new(String::new()).headers();
        let csp = headers
            .get(header::CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        // Plain-http origins still load the fallback body's image.
        assert!(csp.contains("img-src 'self' https: data:"));
        assert!(csp.contains("default-src 'none'"));
    }

    #[test]
    fn etag_is_quoted_hex_and_stable() {
        let a = RenderedPreview::new("same".to_string());
        let b = RenderedPreview::new("same".to_string());
        let c = RenderedPreview::new("different".to_string());
        let etag = a.etag();
        assert_eq!(etag.len(), 18); // 16 hex chars + 2 quotes
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag, b.etag());
        assert_ne!(etag, c.etag());
        assert_eq!(a.headers().get(header::ETAG).unwrap(), etag.as_str());
    }

    #[test]
    fn into_response_is_ok() {
        let response = RenderedPreview::new("<p>x</p>".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
    }
}
