//! Blog post metadata as registered for social previews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata for a single blog post.
///
/// Missing fields deserialize as empty so a sparse entry still renders. An
/// empty slug is rejected when the registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetadata {
    /// URL-path-safe identifier, unique across the registry.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    /// Human-readable publish date, e.g. "April 15, 2025".
    pub publish_date: String,
    /// Cover image path, relative to the site origin (or an absolute URL).
    pub image_path: String,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub read_time: String,
}

impl PostMetadata {
    /// Keywords joined for a `<meta name="keywords">` tag.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }

    /// Path of this post under the blog, e.g. `/blog/my-post`.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Publish date in ISO-8601 form when it can be parsed.
    ///
    /// Accepts "Month D, YYYY" (the display form used on the site) and
    /// "YYYY-MM-DD". Returns `None` for anything else.
    pub fn published_iso(&self) -> Option<String> {
        let raw = self.publish_date.trim();
        NaiveDate::parse_from_str(raw, "%B %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%b %d, %Y"))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Value for `article:published_time`: ISO date if parseable, else the raw string.
    pub fn published_time(&self) -> String {
        self.published_iso().unwrap_or_else(|| self.publish_date.clone())
    }
}

/// Blog-wide preview metadata used when a crawler fetches the blog index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogIndex {
    pub title: String,
    pub description: String,
    pub image_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_dated(date: &str) -> PostMetadata {
        PostMetadata {
            slug: "p".to_string(),
            publish_date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn keywords_joined_with_comma_space() {
        let post = PostMetadata {
            keywords: vec!["a".into(), "b c".into(), "d".into()],
            ..Default::default()
        };
        assert_eq!(post.keywords_joined(), "a, b c, d");
    }

    #[test]
    fn keywords_joined_empty() {
        assert_eq!(PostMetadata::default().keywords_joined(), "");
    }

    #[test]
    fn path_includes_blog_prefix() {
        let post = PostMetadata {
            slug: "jenkins-cicd-aws".into(),
            ..Default::default()
        };
        assert_eq!(post.path(), "/blog/jenkins-cicd-aws");
    }

    #[test]
    fn published_iso_long_month() {
        assert_eq!(
            post_dated("April 15, 2025").published_iso().as_deref(),
            Some("2025-04-15")
        );
    }

    #[test]
    fn published_iso_single_digit_day() {
        assert_eq!(
            post_dated("May 3, 2024").published_iso().as_deref(),
            Some("2024-05-03")
        );
    }

    #[test]
    fn published_iso_short_month() {
        assert_eq!(
            post_dated("Jan 01, 2024").published_iso().as_deref(),
            Some("2024-01-01")
        );
    }

    #[test]
    fn published_iso_already_iso() {
        assert_eq!(
            post_dated("2025-04-25").published_iso().as_deref(),
            Some("2025-04-25")
        );
    }

    #[test]
    fn published_iso_unparseable() {
        assert!(post_dated("sometime in spring").published_iso().is_none());
        assert!(post_dated("").published_iso().is_none());
    }

    #[test]
    fn published_time_falls_back_to_raw() {
        assert_eq!(post_dated("Spring 2025").published_time(), "Spring 2025");
        assert_eq!(post_dated("April 15, 2025").published_time(), "2025-04-15");
    }

    #[test]
    fn deserialize_sparse_entry_defaults_to_empty() {
        let post: PostMetadata = serde_json::from_str(r#"{"slug":"only-slug"}"#).unwrap();
        assert_eq!(post.slug, "only-slug");
        assert!(post.title.is_empty());
        assert!(post.keywords.is_empty());
        assert!(post.image_path.is_empty());
    }
}
