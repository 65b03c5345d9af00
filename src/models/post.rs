//! Blog post model as supplied by the content source.

use serde::{Deserialize, Serialize};

/// A blog post (or case study) listed on the blog page.
///
/// Only `title`, `excerpt`, `category` and `tags` take part in filtering; the
/// remaining fields are carried through for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier within a collection
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// Human-readable category label, e.g. "Case Study"
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// URL slug of the post page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    /// Estimated reading time, e.g. "6 min read"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl ContentItem {
    /// Create a post with the fields used by filtering.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            category: category.into(),
            tags,
            ..Default::default()
        }
    }
}
