//! Article preview for a single blog post.

use folio_core::PostMetadata;
use maud::html;
use url::Url;

use super::RenderedPreview;
use super::components::{ArticleData, OpenGraphData, absolute_url, page_shell, redirect_script};

/// Render the preview document for `post` as served from `origin`.
///
/// `signatures` feeds the client-side redirect so a human who receives a
/// cached copy is sent on to the real page.
pub fn render_post(
    post: &PostMetadata,
    origin: &Url,
    site_name: &str,
    signatures: &[String],
) -> RenderedPreview {
    let page_url = absolute_url(origin, &post.path());
    let image_url = absolute_url(origin, &post.image_path);
    let blog_url = absolute_url(origin, "/blog");
    let keywords = post.keywords_joined();
    let published_time = post.published_time();

    let og = OpenGraphData {
        title: &post.title,
        description: &post.description,
        og_type: "article",
        url: &page_url,
        image: &image_url,
        twitter_card_type: "summary_large_image",
    };

    let article = ArticleData {
        published_time: &published_time,
        author: &post.author,
        keywords: &keywords,
        tags: &post.tags,
    };

    let body = html! {
        article class="card" {
            @if !image_url.is_empty() {
                img class="cover" src=(image_url) alt=(post.title);
            }
            h1 class="title" { (post.title) }
            p class="description" { (post.description) }
            p class="byline" {
                "By " (post.author) " | " (post.publish_date)
                @if !post.read_time.is_empty() {
                    " | " (post.read_time)
                }
            }
        }
        p class="back" {
            a href=(blog_url) { "Back to all blog posts" }
        }
    };

    let markup = page_shell(
        og,
        Some(article),
        site_name,
        Some(redirect_script(&page_url, signatures)),
        body,
    );

    RenderedPreview::new(markup.into_string())
}
