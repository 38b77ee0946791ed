//! Edge dispatch: decide whether a request gets a preview or passes through.
//!
//! ```text
//! GET|HEAD /blog, /blog/         + crawler UA -> blog index preview
//! GET|HEAD /blog/{known-slug}[/] + crawler UA -> post preview
//! anything else                               -> pass through
//! ```
//!
//! Paths outside `/blog` never reach the classifier. Unknown slugs pass
//! through even for crawlers; the downstream application owns 404 handling.

use std::sync::Arc;

use axum::http::{HeaderMap, Method, header};
use folio_core::{CrawlerSignatures, PostSource};
use url::Url;

use crate::render::{self, RenderedPreview};

/// Outcome of dispatching a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Forward the request unmodified to the downstream application.
    PassThrough,
    /// Respond with this document instead of forwarding.
    Intercept(RenderedPreview),
}

/// Which blog route a path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogRoute<'a> {
    Index,
    Post(&'a str),
    Other,
}

/// Classify a request path.
pub fn classify_path(path: &str) -> BlogRoute<'_> {
    if path == "/blog" || path == "/blog/" {
        return BlogRoute::Index;
    }
    match path.strip_prefix("/blog/") {
        Some(rest) => {
            let slug = rest.strip_suffix('/').unwrap_or(rest);
            if slug.is_empty() || slug.contains('/') {
                BlogRoute::Other
            } else {
                BlogRoute::Post(slug)
            }
        }
        None => BlogRoute::Other,
    }
}

/// Request-independent dispatch context, built once at startup.
pub struct Dispatcher {
    registry: Arc<dyn PostSource>,
    signatures: CrawlerSignatures,
    base_url: Url,
    site_name: String,
    trust_forwarded: bool,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<dyn PostSource>,
        signatures: CrawlerSignatures,
        base_url: Url,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            signatures,
            base_url,
            site_name: site_name.into(),
            trust_forwarded: false,
        }
    }

    /// Honor `X-Forwarded-Host` and `X-Forwarded-Proto` when building the
    /// request origin. Only enable behind a proxy that overwrites them.
    pub fn trust_forwarded(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    pub fn registry(&self) -> &dyn PostSource {
        self.registry.as_ref()
    }

    pub fn signatures(&self) -> &CrawlerSignatures {
        &self.signatures
    }

    /// Decide what to do with a request.
    pub fn dispatch(&self, method: &Method, path: &str, headers: &HeaderMap) -> Dispatch {
        if method != Method::GET && method != Method::HEAD {
            return Dispatch::PassThrough;
        }

        match classify_path(path) {
            BlogRoute::Other => Dispatch::PassThrough,
            BlogRoute::Index => {
                let Some(signature) = self.crawler_signature(headers) else {
                    return Dispatch::PassThrough;
                };
                tracing::debug!(signature, "serving blog index preview");
                let origin = request_origin(headers, &self.base_url, self.trust_forwarded);
                Dispatch::Intercept(render::render_index(
                    self.registry.blog_index(),
                    self.registry.list_all(),
                    &origin,
                    &self.site_name,
                    self.signatures.as_slice(),
                ))
            }
            BlogRoute::Post(slug) => {
                let Some(post) = self.registry.get_by_slug(slug) else {
                    tracing::trace!(slug, "no registered post, passing through");
                    return Dispatch::PassThrough;
                };
                let Some(signature) = self.crawler_signature(headers) else {
                    return Dispatch::PassThrough;
                };
                tracing::debug!(slug, signature, "serving post preview");
                let origin = request_origin(headers, &self.base_url, self.trust_forwarded);
                Dispatch::Intercept(render::render_post(
                    post,
                    &origin,
                    &self.site_name,
                    self.signatures.as_slice(),
                ))
            }
        }
    }

    /// The crawler signature matched by the request's `User-Agent`, if any.
    ///
    /// Opaque bytes are decoded lossily so a crawler UA carrying non-ASCII
    /// text still classifies.
    fn crawler_signature(&self, headers: &HeaderMap) -> Option<&str> {
        let user_agent = headers
            .get(header::USER_AGENT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .unwrap_or_default();
        self.signatures.matching(&user_agent)
    }
}

/// Origin the request was made against.
///
/// Host comes from `Host` and scheme from `fallback`. With `trust_forwarded`,
/// `X-Forwarded-Host` takes precedence over `Host` and `X-Forwarded-Proto`
/// sets the scheme when it names http or https. Without a usable host,
/// `fallback` is the origin.
pub fn request_origin(headers: &HeaderMap, fallback: &Url, trust_forwarded: bool) -> Url {
    let forwarded = |name: &str| {
        if trust_forwarded {
            first_value(headers, name)
        } else {
            None
        }
    };

    let Some(host) =
        forwarded("x-forwarded-host").or_else(|| first_value(headers, header::HOST.as_str()))
    else {
        return origin_of(fallback);
    };

    let scheme = match forwarded("x-forwarded-proto") {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        Some(proto) if proto.eq_ignore_ascii_case("http") => "http",
        _ => fallback.scheme(),
    };

    match Url::parse(&format!("{scheme}://{host}")) {
        // A host header smuggling a path, query or credentials is not an origin.
        Ok(url)
            if url.host_str().is_some()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none()
                && url.username().is_empty()
                && url.password().is_none() =>
        {
            url
        }
        _ => origin_of(fallback),
    }
}

/// First comma-separated value of a header, trimmed.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Strip a URL down to scheme, host and port.
fn origin_of(url: &Url) -> Url {
    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}
