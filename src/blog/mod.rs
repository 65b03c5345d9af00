//! Blog listing filters.
//!
//! Pure functions over an in-memory post collection:
//! - **category**: label → slug normalization with a slugify fallback
//! - **filter**: category filter, free-text search, and the combined "N of M" view
//! - **tags**: popular tag ranking over the full collection

pub mod category;
pub mod filter;
pub mod tags;

pub use category::{normalize_category, slugify, ALL_CATEGORIES, CATEGORY_MAPPING};
pub use filter::{
    apply, category_counts, filter_by_category, filter_by_search, FilterOutcome, FilterQuery,
};
pub use tags::{rank_popular_tags, tag_counts, TagCount, DEFAULT_POPULAR_TAG_LIMIT};
