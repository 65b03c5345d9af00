//! Category label normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// Slug of the pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Known category labels and the slug each one filters under.
pub static CATEGORY_MAPPING: &[(&str, &str)] = &[
    ("Case Study", "case-studies"),
    ("Case Studies", "case-studies"),
    ("Web Development", "web-development"),
    ("Mobile Development", "mobile-development"),
    ("Design", "design"),
    ("UI/UX", "design"),
    ("Business", "business"),
    ("Technology", "technology"),
    ("Tutorial", "tutorials"),
    ("Tutorials", "tutorials"),
    ("Company News", "news"),
    ("News", "news"),
    ("Insights", "insights"),
];

/// Map a category label to its filter slug.
///
/// Labels missing from [`CATEGORY_MAPPING`] are slugified: trimmed,
/// lowercased, and each whitespace run replaced by one hyphen.
pub fn normalize_category(label: &str) -> String {
    CATEGORY_MAPPING
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, slug)| (*slug).to_string())
        .unwrap_or_else(|| slugify(label))
}

/// Fallback slug for labels with no mapping entry.
pub fn slugify(label: &str) -> String {
    WHITESPACE_RUN
        .replace_all(label.trim(), "-")
        .to_lowercase()
}
