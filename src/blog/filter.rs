//! Category and free-text filtering of the blog listing.
//!
//! Filters are stable: they return a subsequence of their input in the
//! original order. Results are never relevance-ranked.

use super::category::{normalize_category, ALL_CATEGORIES};
use crate::models::ContentItem;
use serde::{Deserialize, Serialize};

/// Active filter state of the blog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterQuery {
    /// Category slug, or `"all"`
    pub category: String,

    /// Free-text search term
    pub search: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl FilterQuery {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }
}

/// Result of applying a [`FilterQuery`], with the counts for "N of M" display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    /// Items passing both filters, in source order
    pub items: Vec<&'a ContentItem>,

    /// Items in the active category before searching (M)
    pub category_total: usize,
}

impl FilterOutcome<'_> {
    /// Items shown after searching (N).
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

/// Keep items whose normalized category equals `active_slug`.
///
/// `"all"` keeps everything.
pub fn filter_by_category<'a, I>(items: I, active_slug: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    if active_slug == ALL_CATEGORIES {
        return items.into_iter().collect();
    }
    items
        .into_iter()
        .filter(|item| normalize_category(&item.category) == active_slug)
        .collect()
}

/// Keep items where the term appears, case-insensitively, in the title,
/// excerpt, category, or any tag.
///
/// A blank term keeps everything. The term is trimmed before matching.
pub fn filter_by_search<'a, I>(items: I, term: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let term = term.trim();
    if term.is_empty() {
        return items.into_iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches_term(item, &needle))
        .collect()
}

fn matches_term(item: &ContentItem, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&item.title)
        || contains(&item.excerpt)
        || item.tags.iter().any(|tag| contains(tag))
        || contains(&item.category)
}

/// Category filter first, then search within it.
pub fn apply<'a>(items: &'a [ContentItem], query: &FilterQuery) -> FilterOutcome<'a> {
    let in_category = filter_by_category(items, &query.category);
    let category_total = in_category.len();
    let items = filter_by_search(in_category, &query.search);

    tracing::debug!(
        category = %query.category,
        search = %query.search,
        shown = items.len(),
        category_total,
        "Applied blog filter"
    );

    FilterOutcome {
        items,
        category_total,
    }
}

/// Slugs with their item counts, for rendering filter tabs.
///
/// Starts with `("all", total)`; remaining slugs follow first-occurrence order.
pub fn category_counts(items: &[ContentItem]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = vec![(ALL_CATEGORIES.to_string(), items.len())];

    for item in items {
        let slug = normalize_category(&item.category);
        match counts[1..].iter_mut().find(|(s, _)| *s == slug) {
            Some((_, count)) => *count += 1,
            None => counts.push((slug, 1)),
        }
    }

    counts
}
