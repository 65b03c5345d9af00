//! Popular tag ranking.

use crate::models::ContentItem;
use std::collections::HashMap;

/// Number of popular tags shown in the blog sidebar.
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 8;

/// A tag and how many items carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count every tag across `items`, most frequent first.
///
/// Ties keep first-occurrence order: the count table is built in insertion
/// order and sorted with a stable sort.
pub fn tag_counts<'a, I>(items: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut counts: Vec<TagCount> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for tag in items.into_iter().flat_map(|item| item.tags.iter()) {
        match positions.get(tag.as_str()) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `limit` most used tags over the full, unfiltered collection.
pub fn rank_popular_tags<'a, I>(items: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    tag_counts(items)
        .into_iter()
        .take(limit)
        .map(|tc| tc.tag)
        .collect()
}
