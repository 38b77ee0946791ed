//! Blog index preview: the blog as a whole plus a list of its posts.

use folio_core::{BlogIndex, PostMetadata};
use maud::html;
use url::Url;

use super::RenderedPreview;
use super::components::{OpenGraphData, absolute_url, page_shell, redirect_script};

/// Render the preview document for the blog index.
///
/// Like a post preview, the document sends humans on to the live `/blog`.
pub fn render_index(
    index: &BlogIndex,
    posts: &[PostMetadata],
    origin: &Url,
    site_name: &str,
    signatures: &[String],
) -> RenderedPreview {
    let page_url = absolute_url(origin, "/blog");
    let image_url = absolute_url(origin, &index.image_path);

    let og = OpenGraphData {
        title: &index.title,
        description: &index.description,
        og_type: "website",
        url: &page_url,
        image: &image_url,
        twitter_card_type: "summary_large_image",
    };

    let body = html! {
        section class="card" {
            h1 class="title" { (index.title) }
            p class="description" { (index.description) }
            ul class="posts" {
                @for post in posts {
                    li {
                        a href=(absolute_url(origin, &post.path())) { (post.title) }
                        @if !post.publish_date.is_empty() {
                            time datetime=(post.published_time()) { (post.publish_date) }
                        }
                    }
                }
            }
        }
    };

    let markup = page_shell(
        og,
        None,
        site_name,
        Some(redirect_script(&page_url, signatures)),
        body,
    );
    RenderedPreview::new(markup.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> BlogIndex {
        BlogIndex {
            title: "Technical Blog".into(),
            description: "Posts on DevOps.".into(),
            image_path: "/images/profile.jpg".into(),
        }
    }

    fn posts() -> Vec<PostMetadata> {
        vec![
            PostMetadata {
                slug: "first".into(),
                title: "First Post".into(),
                publish_date: "April 15, 2025".into(),
                ..Default::default()
            },
            PostMetadata {
                slug: "second".into(),
                title: "Second Post".into(),
                ..Default::default()
            },
        ]
    }

    fn origin() -> Url {
        Url::parse("https://rohannag.dev").unwrap()
    }

    #[test]
    fn index_meta() {
        let html = render_index(&index(), &posts(), &origin(), "Rohan Nag", &[]).html;
        assert!(html.contains("<title>Technical Blog</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://rohannag.dev/blog">"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://rohannag.dev/images/profile.jpg">"#
        ));
        assert!(!html.contains("article:published_time"));
    }

    #[test]
    fn index_lists_every_post_in_order() {
        let html = render_index(&index(), &posts(), &origin(), "Rohan Nag", &[]).html;
        let first = html
            .find(r#"<a href="https://rohannag.dev/blog/first">First Post</a>"#)
            .unwrap();
        let second = html
            .find(r#"<a href="https://rohannag.dev/blog/second">Second Post</a>"#)
            .unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<time datetime="2025-04-15">April 15, 2025</time>"#));
    }

    #[test]
    fn index_without_posts() {
        let html = render_index(&index(), &[], &origin(), "Rohan Nag", &[]).html;
        assert!(html.contains(r#"<ul class="posts"></ul>"#));
    }

    #[test]
    fn index_is_deterministic() {
        let a = render_index(&index(), &posts(), &origin(), "S", &[]);
        let b = render_index(&index(), &posts(), &origin(), "S", &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn index_includes_redirect_script_for_humans() {
        let sigs = vec!["twitterbot".to_string()];
        let html = render_index(&index(), &posts(), &origin(), "Rohan Nag", &sigs).html;
        assert!(html.contains(r#"window.location.replace("https://rohannag.dev/blog")"#));
        assert!(html.contains(r#"["twitterbot"]"#));
    }
}
