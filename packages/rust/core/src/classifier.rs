//! Noise filtering and category grouping.
//!
//! Placeholder listings ("My Actor 3", "test crawler", ...) are dropped, and
//! the rest are bucketed by category. Labels are grouped by their normalized
//! display name, so `ai` and `AI` share one group (and one output folder).
//! An entry listed under several categories appears in each of them once.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument};

use megalist_markdown::CategoryLabel;
use megalist_shared::{CategoryGroup, Entry};

/// Placeholder title patterns, checked in order against both the display
/// title and the identifier. Several overlap; the list is kept as-is.
const PLACEHOLDER_PATTERNS: [&str; 8] = [
    r"(?i)^my actor",
    r"(?i)^testactor",
    r"(?i)^test crawler",
    r"(?i)^test actor",
    r"(?i)^my actorrr",
    r"(?i)^my actor\s*[0-9]+$",
    r"(?i)^test\s*$",
    r"(?i)^test\s+crawler",
];

/// Descriptions that carry no information.
const PLACEHOLDER_DESCRIPTIONS: [&str; 2] = ["", "test"];

/// Title fragments that, paired with a placeholder description, mark noise.
const PLACEHOLDER_TITLE_FRAGMENTS: [&str; 2] = ["my actor", "test"];

static PLACEHOLDER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PLACEHOLDER_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

/// Outcome of classifying a catalog.
///
/// Groups and the uncategorized bucket hold indices into the classified
/// slice, so the entries themselves are never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Non-empty category groups, one per display name, ordered by it. Each
    /// group carries the first raw label seen for that name.
    pub groups: Vec<CategoryGroup>,
    /// Retained entries without any category, in load order.
    pub uncategorized: Vec<usize>,
    /// Number of entries in the input.
    pub total: usize,
    /// Number of entries discarded as noise.
    pub filtered_out: usize,
}

impl Classification {
    /// Entries that survived the noise filter.
    pub fn total_retained(&self) -> usize {
        self.total - self.filtered_out
    }
}

/// Whether `entry` is a placeholder/test listing that should not be published.
pub fn is_noise(entry: &Entry) -> bool {
    let title = entry
        .title
        .as_deref()
        .or(entry.identifier.as_deref())
        .unwrap_or("")
        .to_lowercase();
    let name = entry.identifier.as_deref().unwrap_or("").to_lowercase();

    if let Some(re) = PLACEHOLDER_RES
        .iter()
        .find(|re| re.is_match(&title) || re.is_match(&name))
    {
        debug!(title = %title, pattern = re.as_str(), "placeholder title");
        return true;
    }

    let description = entry.description.trim().to_lowercase();
    PLACEHOLDER_DESCRIPTIONS.contains(&description.as_str())
        && PLACEHOLDER_TITLE_FRAGMENTS
            .iter()
            .any(|fragment| title.contains(fragment))
}

/// Filter noise and group the remaining entries by category.
#[instrument(skip_all, fields(entries = entries.len()))]
pub fn classify(entries: &[Entry]) -> Classification {
    let mut groups: HashMap<String, CategoryGroup> = HashMap::new();
    let mut display_names: HashMap<&str, String> = HashMap::new();
    let mut uncategorized = Vec::new();
    let mut filtered_out = 0;

    for (index, entry) in entries.iter().enumerate() {
        if is_noise(entry) {
            filtered_out += 1;
            continue;
        }

        if entry.categories.is_empty() {
            uncategorized.push(index);
            continue;
        }

        for label in &entry.categories {
            let display = display_names
                .entry(label.as_str())
                .or_insert_with(|| CategoryLabel::parse(label).display);
            groups
                .entry(display.clone())
                .or_insert_with(|| CategoryGroup::new(label.as_str()))
                .insert(index, entry.key());
        }
    }

    let mut groups: Vec<(String, CategoryGroup)> = groups.into_iter().collect();
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    let classification = Classification {
        groups: groups.into_iter().map(|(_, group)| group).collect(),
        uncategorized,
        total: entries.len(),
        filtered_out,
    };

    info!(
        retained = classification.total_retained(),
        filtered = filtered_out,
        categories = classification.groups.len(),
        uncategorized = classification.uncategorized.len(),
        "catalog classified"
    );

    classification
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(name: &str, title: &str, description: &str, categories: &[&str]) -> Entry {
        Entry {
            identifier: Some(name.into()),
            owner: Some("acme".into()),
            title: (!title.is_empty()).then(|| title.to_string()),
            description: description.into(),
            link: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn bare_test_titles_are_noise() {
        for title in ["Test", "test", "TEST", "test  "] {
            assert!(is_noise(&make_entry("x", title, "", &[])), "{title:?}");
        }
        // The `^test\s*$` rule applies even with a real description.
        assert!(is_noise(&make_entry("x", "Test", "A real description.", &[])));
    }

    #[test]
    fn placeholder_prefixes_are_noise() {
        let titles = [
            "My Actor",
            "My Actor 5",
            "my actor29",
            "My Actorrr",
            "TestActor",
            "test Crawler",
            "TEST CRAWLER CMS",
            "Test Actor for something",
        ];
        for title in titles {
            assert!(is_noise(&make_entry("x", title, "Has a description", &[])), "{title:?}");
        }
    }

    #[test]
    fn identifier_is_checked_too() {
        assert!(is_noise(&make_entry("testactor-pro", "Shiny Name", "desc", &[])));
        assert!(is_noise(&make_entry("test", "Shiny Name", "desc", &[])));
        assert!(!is_noise(&make_entry("shiny-name", "Shiny Name", "desc", &[])));
    }

    #[test]
    fn placeholder_description_needs_suspicious_title() {
        assert!(is_noise(&make_entry("x", "Contest Finder", "", &[])));
        assert!(is_noise(&make_entry("x", "Latest News", " TEST ", &[])));
        assert!(!is_noise(&make_entry("x", "Lead Finder", "", &[])));
        assert!(!is_noise(&make_entry("x", "Contest Finder", "Finds contests.", &[])));
    }

    #[test]
    fn real_titles_are_kept() {
        for title in ["Shop Scraper", "Lead Finder", "Actor Toolkit", "Testimonial Scraper"] {
            assert!(!is_noise(&make_entry("x", title, "Useful tool.", &[])), "{title:?}");
        }
    }

    #[test]
    fn groups_entries_and_tracks_uncategorized() {
        let entries = vec![
            make_entry("a", "My Actor 5", "", &["e_commerce"]),
            make_entry("b", "Shop Scraper", "Shops.", &["e_commerce"]),
            make_entry("c", "Lead Finder", "Leads.", &[]),
        ];

        let result = classify(&entries);
        assert_eq!(result.total, 3);
        assert_eq!(result.filtered_out, 1);
        assert_eq!(result.total_retained(), 2);
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].label, "e_commerce");
        assert_eq!(result.groups[0].members(), &[1]);
        assert_eq!(result.uncategorized, vec![2]);
    }

    #[test]
    fn duplicate_category_labels_add_entry_once() {
        let entries = vec![make_entry(
            "a",
            "Shop Scraper",
            "Shops.",
            &["e_commerce", "e_commerce"],
        )];
        let result = classify(&entries);
        assert_eq!(result.groups[0].len(), 1);
    }

    #[test]
    fn same_key_across_entries_is_deduplicated() {
        let entries = vec![
            make_entry("shop", "Shop Scraper", "v1", &["e_commerce"]),
            make_entry("shop", "Shop Scraper", "v2", &["e_commerce"]),
        ];
        let result = classify(&entries);
        assert_eq!(result.groups[0].members(), &[0]);
    }

    #[test]
    fn multi_category_entries_join_every_group() {
        let entries = vec![make_entry(
            "a",
            "Shop Scraper",
            "Shops.",
            &["e_commerce", "automation"],
        )];
        let result = classify(&entries);
        assert_eq!(result.groups.len(), 2);
        assert!(result.groups.iter().all(|g| g.members() == [0]));
    }

    #[test]
    fn groups_are_ordered_by_display_name() {
        let entries = vec![
            make_entry("a", "A", "x", &["social_media"]),
            make_entry("b", "B", "x", &["AI"]),
            make_entry("c", "C", "x", &["real_estate"]),
            make_entry("d", "D", "x", &["automation"]),
        ];
        let labels: Vec<_> = classify(&entries)
            .groups
            .into_iter()
            .map(|g| g.label)
            .collect();
        assert_eq!(labels, vec!["AI", "automation", "real_estate", "social_media"]);
    }

    #[test]
    fn case_variants_of_a_label_share_one_group() {
        let entries = vec![
            make_entry("alpha", "Alpha Bot", "x", &["ai"]),
            make_entry("beta", "Beta Bot", "x", &["AI"]),
            make_entry("gamma", "Gamma Bot", "x", &["ai", "AI"]),
            make_entry("delta", "Delta Shop", "x", &["e_commerce", "E_COMMERCE"]),
        ];

        let result = classify(&entries);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].label, "ai");
        assert_eq!(result.groups[0].members(), &[0, 1, 2]);
        assert_eq!(result.groups[1].label, "e_commerce");
        assert_eq!(result.groups[1].members(), &[3]);
    }

    #[test]
    fn classification_is_idempotent() {
        let entries = vec![
            make_entry("a", "Shop Scraper", "Shops.", &["e_commerce", "automation"]),
            make_entry("b", "Test", "", &["e_commerce"]),
            make_entry("c", "Lead Finder", "Leads.", &[]),
            make_entry("d", "Price Tracker", "Prices.", &["e_commerce"]),
        ];
        assert_eq!(classify(&entries), classify(&entries));
    }
}
