//! Integration tests for blog listing filters.
//!
//! Covers category normalization through the public API, search semantics,
//! the combined "N of M" view, and popular tag ranking.

use studio_site_core::blog::{
    apply, filter_by_category, filter_by_search, normalize_category, rank_popular_tags,
    FilterQuery, DEFAULT_POPULAR_TAG_LIMIT,
};
use studio_site_core::ContentItem;

fn post(id: &str, title: &str, excerpt: &str, category: &str, tags: &[&str]) -> ContentItem {
    ContentItem::new(
        id,
        title,
        excerpt,
        category,
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

fn catalog() -> Vec<ContentItem> {
    vec![
        post(
            "p1",
            "How We Cut Cloud Costs by 40%",
            "A logistics client case study.",
            "Case Study",
            &["aws", "devops", "cost"],
        ),
        post(
            "p2",
            "Design Tokens in Practice",
            "Keeping Figma and code in sync.",
            "Design",
            &["design-systems", "figma"],
        ),
        post(
            "p3",
            "Server Components Explained",
            "What changes for data fetching.",
            "Web Development",
            &["react", "nextjs", "performance"],
        ),
        post(
            "p4",
            "Launching a Telehealth App",
            "From prototype to app store in 12 weeks.",
            "Case Study",
            &["mobile", "react", "healthcare"],
        ),
        post(
            "p5",
            "Serverless Data Pipelines",
            "Event-driven ETL without servers.",
            "Cloud Engineering",
            &["aws", "serverless"],
        ),
    ]
}

fn ids(items: &[&ContentItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

#[test]
fn test_mapped_category_included() {
    let items = vec![post("1", "T", "E", "Case Study", &[])];
    let result = filter_by_category(&items, "case-studies");
    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_unmapped_category_included_via_slugify() {
    let items = vec![post("1", "T", "E", "Weird New Category", &[])];
    let result = filter_by_category(&items, "weird-new-category");
    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_all_is_identity() {
    let items = catalog();
    let result = filter_by_category(&items, "all");
    assert_eq!(result.len(), items.len());
    for (filtered, original) in result.iter().zip(items.iter()) {
        assert_eq!(*filtered, original);
    }
}

#[test]
fn test_category_filter_preserves_order() {
    let items = catalog();
    assert_eq!(ids(&filter_by_category(&items, "case-studies")), vec!["p1", "p4"]);
    assert_eq!(ids(&filter_by_category(&items, "cloud-engineering")), vec!["p5"]);
}

#[test]
fn test_search_title_substring_always_found() {
    for item in catalog() {
        let title = item.title.clone();
        let chars: Vec<char> = title.chars().collect();
        // Every window of the title, upper-cased to exercise case folding
        for start in 0..chars.len().saturating_sub(3) {
            let term: String = chars[start..start + 3].iter().collect::<String>().to_uppercase();
            if term.trim().is_empty() {
                continue;
            }
            let single = [item.clone()];
            assert_eq!(
                filter_by_search(&single, &term).len(),
                1,
                "term {:?} should match title {:?}",
                term,
                title
            );
        }
    }
}

#[test]
fn test_search_or_semantics_across_fields() {
    let items = catalog();
    // "aws" is only a tag; "sync" only in an excerpt; "case study" only in a category/excerpt
    assert_eq!(ids(&filter_by_search(&items, "AWS")), vec!["p1", "p5"]);
    assert_eq!(ids(&filter_by_search(&items, "sync")), vec!["p2"]);
    assert_eq!(ids(&filter_by_search(&items, "case study")), vec!["p1", "p4"]);
}

#[test]
fn test_search_does_not_require_all_words() {
    let items = catalog();
    // Substring match, not word AND: "react figma" appears nowhere as one substring
    assert!(filter_by_search(&items, "react figma").is_empty());
}

#[test]
fn test_empty_and_whitespace_terms_are_noops() {
    let items = catalog();
    assert_eq!(filter_by_search(&items, "").len(), items.len());
    assert_eq!(filter_by_search(&items, "   ").len(), items.len());
    assert_eq!(filter_by_search(&items, "\t\n").len(), items.len());
}

#[test]
fn test_category_applied_before_search() {
    let items = catalog();
    let outcome = apply(&items, &FilterQuery::new("case-studies", "react"));
    assert_eq!(outcome.category_total, 2);
    assert_eq!(outcome.shown(), 1);
    assert_eq!(ids(&outcome.items), vec!["p4"]);

    let outcome = apply(&items, &FilterQuery::new("design", "react"));
    assert_eq!(outcome.category_total, 1);
    assert_eq!(outcome.shown(), 0);
}

#[test]
fn test_tag_ranking_tie_break_first_occurrence() {
    let items = vec![
        post("1", "a", "", "News", &["x"]),
        post("2", "b", "", "News", &["y"]),
        post("3", "c", "", "News", &["x"]),
        post("4", "d", "", "News", &["z"]),
        post("5", "e", "", "News", &["y"]),
    ];
    let ranked = rank_popular_tags(&items, DEFAULT_POPULAR_TAG_LIMIT);
    assert_eq!(ranked, vec!["x", "y", "z"]);
}

#[test]
fn test_tag_ranking_over_full_catalog() {
    let items = catalog();
    let ranked = rank_popular_tags(&items, 3);
    // aws and react appear twice; aws occurs first
    assert_eq!(ranked, vec!["aws", "react", "devops"]);
}

#[test]
fn test_empty_catalog() {
    let items: Vec<ContentItem> = Vec::new();
    assert!(filter_by_category(&items, "design").is_empty());
    assert!(filter_by_search(&items, "anything").is_empty());
    assert!(rank_popular_tags(&items, 8).is_empty());
}

#[test]
fn test_normalize_category_total() {
    for label in ["", "   ", "Case Study", "ÜBER  Cool", "a\u{00a0}b", "x/y"] {
        // Never panics and always yields the same slug
        assert_eq!(normalize_category(label), normalize_category(label));
    }
    assert_eq!(normalize_category("ÜBER  Cool"), "über-cool");
}
