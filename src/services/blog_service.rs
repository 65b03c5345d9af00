//! Blog listing service.
//!
//! Loads the full post collection and runs the listing filters over it.

use crate::blog::{self, FilterQuery};
use crate::config::Config;
use crate::error::ContentResult;
use crate::models::ContentItem;
use crate::repositories::{PostRepository, StaticPostRepository};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Everything the blog page renders for one filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListing {
    /// Posts passing both filters, in source order
    pub posts: Vec<ContentItem>,

    /// Posts in the active category before searching
    pub category_total: usize,

    /// Posts in the whole collection
    pub total: usize,

    /// Most used tags across the whole collection
    pub popular_tags: Vec<String>,

    /// Category slugs with counts, starting with "all"
    pub categories: Vec<(String, usize)>,
}

/// Blog service trait.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Build the listing for a filter state.
    async fn listing(&self, query: &FilterQuery) -> ContentResult<BlogListing>;
}

/// Default implementation of BlogService.
pub struct BlogServiceImpl {
    repository: Arc<dyn PostRepository>,
    popular_tag_limit: usize,
}

impl BlogServiceImpl {
    pub fn new(repository: Arc<dyn PostRepository>, popular_tag_limit: usize) -> Self {
        Self {
            repository,
            popular_tag_limit,
        }
    }

    /// Build the service from `BLOG_POSTS_PATH` and `POPULAR_TAG_LIMIT`.
    ///
    /// Without a posts path the blog is empty.
    pub fn from_config(config: &Config) -> ContentResult<Self> {
        let repository = match &config.blog_posts_path {
            Some(path) => StaticPostRepository::load(path)?,
            None => {
                tracing::warn!("BLOG_POSTS_PATH not set, blog listing will be empty");
                StaticPostRepository::from_items(Vec::new())?
            }
        };
        Ok(Self::new(Arc::new(repository), config.popular_tag_limit))
    }
}

#[async_trait]
impl BlogService for BlogServiceImpl {
    async fn listing(&self, query: &FilterQuery) -> ContentResult<BlogListing> {
        let all = self.repository.list_all().await?;

        let outcome = blog::apply(&all, query);
        let category_total = outcome.category_total;
        let posts = outcome.items.into_iter().cloned().collect();

        Ok(BlogListing {
            posts,
            category_total,
            total: all.len(),
            popular_tags: blog::rank_popular_tags(&all, self.popular_tag_limit),
            categories: blog::category_counts(&all),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn service() -> BlogServiceImpl {
        let posts = vec![
            ContentItem::new("1", "Rust at Scale", "", "Case Study", vec!["rust".into()]),
            ContentItem::new("2", "Color Theory", "", "Design", vec!["ui".into(), "rust".into()]),
            ContentItem::new("3", "Hiring Update", "", "Company News", vec!["team".into()]),
        ];
        let repo = StaticPostRepository::from_items(posts).unwrap();
        BlogServiceImpl::new(Arc::new(repo), 2)
    }

    #[tokio::test]
    async fn test_listing_default_query() {
        let listing = service().listing(&FilterQuery::default()).await.unwrap();
        assert_eq!(listing.posts.len(), 3);
        assert_eq!(listing.total, 3);
        assert_eq!(listing.popular_tags, vec!["rust", "ui"]);
        assert_eq!(listing.categories[0], ("all".to_string(), 3));
    }

    #[tokio::test]
    async fn test_listing_tags_ignore_filters() {
        let listing = service()
            .listing(&FilterQuery::new("news", ""))
            .await
            .unwrap();
        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.category_total, 1);
        assert_eq!(listing.popular_tags, vec!["rust", "ui"]);
    }

    #[tokio::test]
    async fn test_from_config_uses_path_and_tag_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"id": "a", "title": "One", "category": "Design", "tags": ["ux", "figma"]},
                {"id": "b", "title": "Two", "category": "News", "tags": ["ux"]}
            ]"#,
        )
        .unwrap();

        let config = Config {
            blog_posts_path: Some(file.path().to_path_buf()),
            popular_tag_limit: 1,
            ..Config::default()
        };
        let listing = BlogServiceImpl::from_config(&config)
            .unwrap()
            .listing(&FilterQuery::default())
            .await
            .unwrap();

        assert_eq!(listing.total, 2);
        assert_eq!(listing.popular_tags, vec!["ux"]);
    }

    #[tokio::test]
    async fn test_from_config_without_path_is_empty() {
        let listing = BlogServiceImpl::from_config(&Config::default())
            .unwrap()
            .listing(&FilterQuery::default())
            .await
            .unwrap();
        assert_eq!(listing.total, 0);
        assert!(listing.popular_tags.is_empty());
    }

    #[test]
    fn test_from_config_missing_file() {
        let config = Config {
            blog_posts_path: Some("/definitely/not/here.json".into()),
            ..Config::default()
        };
        assert!(BlogServiceImpl::from_config(&config).is_err());
    }
}
