//! Shared HTML components used by the post and index previews.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};
use url::Url;

/// Inline CSS for preview pages.
///
/// Crawlers rarely look at it; it keeps the fallback body readable for the
/// occasional human who lands on a cached preview.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#2563eb;--border:rgba(37,99,235,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}
.card{padding:1.5rem;border:1px solid var(--border);border-radius:10px}
.cover{width:100%;max-height:320px;object-fit:cover;border-radius:8px;margin-bottom:1rem}
.title{font-size:1.6rem;font-weight:700;line-height:1.3;letter-spacing:-.01em;margin-bottom:.5rem}
.description{color:var(--fg2);font-size:1.05rem;margin:.75rem 0}
.byline{font-size:.9rem;color:var(--fg3)}
.posts{list-style:none;margin-top:1rem}
.posts li{padding:.6rem 0;border-top:1px solid var(--border)}
.posts time{display:block;font-size:.8rem;color:var(--fg3)}
.back{margin-top:1.25rem;font-size:.9rem}
@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#60a5fa;--border:rgba(96,165,250,.2)}
}
"#;

/// Content-Security-Policy header value.
///
/// Allows inline styles and the inline redirect script. No external scripts,
/// no frames, only https and data images.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src 'self' https: data:; form-action 'none'; frame-ancestors 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title. Also used for `<title>`.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type ("article" or "website").
    pub og_type: &'a str,
    /// Absolute canonical URL of the page.
    pub url: &'a str,
    /// Absolute image URL, empty when the page has none.
    pub image: &'a str,
    /// Twitter card type ("summary", "summary_large_image").
    pub twitter_card_type: &'a str,
}

/// Article-only metadata.
pub struct ArticleData<'a> {
    pub published_time: &'a str,
    pub author: &'a str,
    pub keywords: &'a str,
    pub tags: &'a [String],
}

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
///
/// `redirect` is an inline script emitted at the end of `<head>`; see
/// [`redirect_script`].
pub fn page_shell(
    og: OpenGraphData<'_>,
    article: Option<ArticleData<'_>>,
    site_name: &str,
    redirect: Option<Markup>,
    body_content: Markup,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (og.title) }
                meta name="description" content=(og.description);
                @if let Some(article) = &article {
                    meta name="keywords" content=(article.keywords);
                    meta name="author" content=(article.author);
                }
                link rel="canonical" href=(og.url);

                // Open Graph
                meta property="og:type" content=(og.og_type);
                meta property="og:url" content=(og.url);
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:image" content=(og.image);
                meta property="og:site_name" content=(site_name);

                // Twitter Card
                meta name="twitter:card" content=(og.twitter_card_type);
                meta name="twitter:url" content=(og.url);
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                meta name="twitter:image" content=(og.image);

                @if let Some(article) = &article {
                    meta property="article:published_time" content=(article.published_time);
                    meta property="article:author" content=(article.author);
                    @for tag in article.tags {
                        meta property="article:tag" content=(tag);
                    }
                }

                style { (PreEscaped(PAGE_CSS)) }
                @if let Some(script) = redirect {
                    (script)
                }
            }
            body {
                main { (body_content) }
            }
        }
    }
}

/// Inline script that sends a human browser on to the real page.
///
/// Only matters when a shared cache hands a crawler's copy to a person; the
/// script re-checks the user agent against `signatures` and leaves crawlers
/// alone. Both values are embedded as JSON literals.
pub fn redirect_script(target_url: &str, signatures: &[String]) -> Markup {
    let sigs = script_json(&signatures);
    let target = script_json(&target_url);
    html! {
        script {
            (PreEscaped(format!(
                "(function(){{var s={sigs},u=(navigator.userAgent||\"\").toLowerCase();\
                 if(!s.some(function(b){{return u.indexOf(b)!==-1}})){{window.location.replace({target})}}}})();"
            )))
        }
    }
}

/// Serialize a value as JSON that is safe inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Resolve `path` against `origin`, keeping absolute http(s) URLs as they are.
///
/// Returns an empty string for an empty path or anything that does not end
/// up as an http(s) URL.
pub fn absolute_url(origin: &Url, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    match origin.join(path) {
        Ok(url) if is_safe_url(url.as_str()) => url.into(),
        _ => String::new(),
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
