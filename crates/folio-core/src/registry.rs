//! Post registry: the single source of blog metadata for previews.
//!
//! The registry is read once at startup, either from the document compiled
//! into the binary or from a JSON file supplied by configuration. After that
//! it is immutable and shared read-only across requests.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "blog":  { "title": "...", "description": "...", "image_path": "/images/x.jpg" },
//!   "posts": [ { "slug": "my-post", "title": "...", ... } ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::post::{BlogIndex, PostMetadata};

/// The registry document shipped with the binary.
pub const BUILTIN_POSTS_JSON: &str = include_str!("../content/posts.json");

/// Read-only lookup contract consumed by the preview renderer and dispatcher.
pub trait PostSource: Send + Sync {
    /// Look up a post by slug. Unknown slugs are `None`, not an error.
    fn get_by_slug(&self, slug: &str) -> Option<&PostMetadata>;

    /// All posts in registration order.
    fn list_all(&self) -> &[PostMetadata];

    /// Blog-wide metadata for the index preview.
    fn blog_index(&self) -> &BlogIndex;
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    blog: BlogIndex,
    #[serde(default)]
    posts: Vec<PostMetadata>,
}

/// In-memory registry built from a JSON document.
#[derive(Debug, Clone)]
pub struct PostRegistry {
    blog: BlogIndex,
    posts: Vec<PostMetadata>,
    by_slug: HashMap<String, usize>,
}

impl PostRegistry {
    /// Build a registry, validating slugs.
    ///
    /// # Errors
    ///
    /// Returns an error if any slug is empty, not path-safe, or repeated.
    pub fn new(blog: BlogIndex, posts: Vec<PostMetadata>) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            validate_slug(&post.slug)?;
            if by_slug.insert(post.slug.clone(), idx).is_some() {
                return Err(Error::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self {
            blog,
            posts,
            by_slug,
        })
    }

    /// Parse a registry from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RegistryDocument = serde_json::from_str(json)?;
        Self::new(doc.blog, doc.posts)
    }

    /// Load a registry from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            posts = registry.posts.len(),
            "post registry loaded from file"
        );
        Ok(registry)
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_POSTS_JSON)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostSource for PostRegistry {
    fn get_by_slug(&self, slug: &str) -> Option<&PostMetadata> {
        self.by_slug.get(slug).map(|&idx| &self.posts[idx])
    }

    fn list_all(&self) -> &[PostMetadata] {
        &self.posts
    }

    fn blog_index(&self) -> &BlogIndex {
        &self.blog
    }
}

/// A slug must be non-empty and limited to `[A-Za-z0-9_-]`.
fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::InvalidSlug {
            slug: slug.to_string(),
            reason: "slug is empty",
        });
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(Error::InvalidSlug {
            slug: slug.to_string(),
            reason: "contains characters outside [A-Za-z0-9_-]",
        });
    }
    Ok(())
}
