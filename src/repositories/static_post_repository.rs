use crate::error::{ContentError, ContentResult};
use crate::models::ContentItem;
use crate::repositories::traits::PostRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Post repository backed by a JSON array loaded once at startup.
#[derive(Clone)]
pub struct StaticPostRepository {
    posts: Arc<Vec<ContentItem>>,
}

impl StaticPostRepository {
    /// Wrap an in-memory collection, rejecting duplicate ids.
    pub fn from_items(posts: Vec<ContentItem>) -> ContentResult<Self> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(ContentError::DuplicateId(post.id.clone()));
            }
        }
        Ok(Self {
            posts: Arc::new(posts),
        })
    }

    /// Parse a JSON array of posts.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let posts: Vec<ContentItem> = serde_json::from_str(json)?;
        Self::from_items(posts)
    }

    /// Load posts from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let repo = Self::from_json(&json)?;
        tracing::info!("Loaded {} blog posts from {}", repo.len(), path.display());
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl PostRepository for StaticPostRepository {
    async fn list_all(&self) -> ContentResult<Vec<ContentItem>> {
        Ok(self.posts.as_ref().clone())
    }

    async fn get(&self, id: &str) -> ContentResult<Option<ContentItem>> {
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }
}
