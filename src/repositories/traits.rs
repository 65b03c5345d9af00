use crate::error::ContentResult;
use crate::models::ContentItem;
use async_trait::async_trait;

/// Source of blog posts.
///
/// Provides abstraction over where posts live (static JSON file, CMS, mock),
/// always returning the full unfiltered collection in display order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in the order the blog lists them.
    async fn list_all(&self) -> ContentResult<Vec<ContentItem>>;

    /// A single post by id.
    async fn get(&self, id: &str) -> ContentResult<Option<ContentItem>>;
}
