//! Index and per-category document rendering.
//!
//! The index embeds every category's full table; each category folder also
//! gets a standalone document with the same table.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use megalist_markdown::{CategoryLabel, TableOptions, format_count, render_table};
use megalist_shared::{Entry, Result};

use crate::classifier::Classification;
use crate::toc::{self, TOC_ANCHOR, UNCATEGORIZED_ANCHOR};

const HERO_TITLE: &str = "# 🚀 API Mega List";

const WHAT_YOU_CAN_BUILD: &str = "\
**The possibilities are endless:**

- 🔍 **Data Collection** - Extract information from websites, social media, e-commerce platforms, and more
- 🤖 **Automation** - Automate repetitive tasks, workflows, and business processes
- 📊 **Analytics & Insights** - Gather market intelligence, competitor data, and business metrics
- 🎯 **Lead Generation** - Find contacts, emails, and business opportunities
- 🛒 **E-commerce Tools** - Monitor prices, track products, analyze market trends
- 📱 **Social Media** - Scrape posts, analyze engagement, track trends
- 🏠 **Real Estate** - Extract property listings, market data, and investment opportunities
- 💼 **Job Market** - Aggregate job listings, analyze salaries, track opportunities
- 🚀 **AI Integration** - Connect with AI models, process content, generate insights

**Each API is production-ready** - integrate it into your application and start building. \
No need to build scrapers from scratch or maintain complex infrastructure.

";

const HOW_TO_USE: &str = "\
## 🚀 How to Use

1. **Browse by Category** - Use the table of contents above to jump to any category
2. **Click Any API** - Every link opens the API's page on its hosting platform
3. **View Documentation** - Each API page has full documentation, examples, and pricing
4. **Run via API** - All listings can be run programmatically
5. **Schedule Runs** - Set up automated schedules for regular data collection

";

const SEPARATOR: &str = "---\n\n";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Settings shared by every document of one run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Date printed in the statistics block and footer.
    pub generated_on: NaiveDate,
    /// File name of the index, used for back-links from category documents.
    pub index_file: String,
    /// Row rendering options.
    pub table: TableOptions,
}

/// A category ready for rendering: normalized label, folder, and members.
#[derive(Debug, Clone)]
pub struct CategoryPage<'a> {
    pub label: CategoryLabel,
    /// Output folder, `<slug>-apis-<count>`.
    pub folder: String,
    /// Members in load order; tables sort them on render.
    pub entries: Vec<&'a Entry>,
}

/// Resolve every category group of `classification` against `entries`.
pub fn category_pages<'a>(
    entries: &'a [Entry],
    classification: &Classification,
) -> Vec<CategoryPage<'a>> {
    classification
        .groups
        .iter()
        .map(|group| {
            let label = CategoryLabel::parse(&group.label);
            let folder = label.folder_name(group.len());
            CategoryPage {
                label,
                folder,
                entries: group.members().iter().map(|&i| &entries[i]).collect(),
            }
        })
        .collect()
}

/// Retained entries without a category, in load order.
pub fn uncategorized_entries<'a>(
    entries: &'a [Entry],
    classification: &Classification,
) -> Vec<&'a Entry> {
    classification
        .uncategorized
        .iter()
        .map(|&i| &entries[i])
        .collect()
}

// ---------------------------------------------------------------------------
// Category document
// ---------------------------------------------------------------------------

/// Render the standalone document written to `<folder>/README.md`.
#[instrument(skip_all, fields(category = %page.label.display, entries = page.entries.len()))]
pub fn render_category(page: &CategoryPage<'_>, ctx: &RenderContext) -> Result<String> {
    let index = &ctx.index_file;
    let mut out = format!("# {}\n\n", page.label.display);
    out.push_str(&format!(
        "<p align=\"right\"><a href=\"../{index}{TOC_ANCHOR}\">← Back to main list</a></p>\n\n"
    ));
    out.push_str("**Organized APIs by Category**\n\n");
    out.push_str(&format!(
        "**{} APIs in this category**\n\n",
        format_count(page.entries.len())
    ));
    out.push_str(&render_table(&page.entries, &ctx.table)?);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push_str(&format!(
        "<p align=\"center\"><a href=\"../{index}\">← Back to main API list</a></p>\n"
    ));

    debug!(len = out.len(), "category document rendered");
    Ok(out)
}

// ---------------------------------------------------------------------------
// Index document
// ---------------------------------------------------------------------------

/// Render the master index.
#[instrument(skip_all, fields(categories = pages.len(), uncategorized = uncategorized.len()))]
pub fn render_index(
    pages: &[CategoryPage<'_>],
    uncategorized: &[&Entry],
    total_retained: usize,
    ctx: &RenderContext,
) -> Result<String> {
    let total = format_count(total_retained);
    let date = ctx.generated_on.format("%Y-%m-%d").to_string();
    let mut out = String::new();

    // Title block
    out.push_str("<div align=\"center\">\n\n");
    out.push_str(&format!("{HERO_TITLE}\n\n"));
    out.push_str(&format!(
        "**The most comprehensive collection of APIs on GitHub** - {total} ready-to-use APIs \
         for building everything from simple automations to full-scale applications.\n\n"
    ));
    out.push_str("</div>\n\n");
    out.push_str(SEPARATOR);

    // Statistics
    out.push_str("<div align=\"center\">\n\n");
    out.push_str("## 📊 Collection Statistics\n\n");
    out.push_str("| Metric | Count |\n|--------|-------|\n");
    out.push_str(&format!("| **Total APIs** | **{total}** |\n"));
    out.push_str(&format!("| **Categories** | **{}** |\n", pages.len()));
    out.push_str(&format!("| **Last Updated** | {date} |\n\n"));
    out.push_str("</div>\n\n");
    out.push_str(SEPARATOR);

    // Fixed descriptive section
    out.push_str("## 🤔 What Can You Build?\n\n");
    out.push_str(&format!(
        "This collection contains **{total} ready-to-use APIs** that you can integrate \
         directly into your applications.\n\n"
    ));
    out.push_str(WHAT_YOU_CAN_BUILD);
    out.push_str(SEPARATOR);

    // Table of contents
    let toc = toc::build_toc(pages, uncategorized.len());
    out.push_str(&toc::render_toc(&toc));
    out.push_str(SEPARATOR);

    // One section per category
    for page in pages {
        out.push_str(&format!("<a id=\"{}\"></a>\n\n", page.label.slug));
        out.push_str(&format!("## {}\n\n", page.label.display));
        out.push_str(&back_to_top());
        out.push_str(&format!(
            "**{} APIs in this category** | [View all →](./{}/)\n\n",
            format_count(page.entries.len()),
            page.folder
        ));
        out.push_str(&render_table(&page.entries, &ctx.table)?);
        out.push('\n');
    }

    if !uncategorized.is_empty() {
        out.push_str(&format!("<a id=\"{UNCATEGORIZED_ANCHOR}\"></a>\n\n"));
        out.push_str("## Uncategorized\n\n");
        out.push_str(&back_to_top());
        out.push_str(&format!(
            "**{} APIs in this category**\n\n",
            format_count(uncategorized.len())
        ));
        out.push_str(&render_table(uncategorized, &ctx.table)?);
        out.push('\n');
    }

    out.push_str(SEPARATOR);
    out.push_str(HOW_TO_USE);
    out.push_str(SEPARATOR);

    // Notes
    out.push_str("## 📝 Notes\n\n");
    out.push_str("- ✅ All APIs are sorted alphabetically within their categories\n");
    out.push_str(&format!(
        "- ✅ Descriptions are shortened for readability (at most {} characters)\n",
        ctx.table.description_limit
    ));
    out.push_str("- ✅ For full descriptions and details, visit the individual API pages\n");
    out.push_str("- ✅ This list is generated automatically from the catalog export\n\n");
    out.push_str(SEPARATOR);

    // Footer
    out.push_str("<div align=\"center\">\n\n");
    out.push_str(&format!(
        "**Total APIs: {total}** | **Categories: {}** | **Last Updated: {date}**\n\n",
        pages.len()
    ));
    out.push_str("</div>\n");

    debug!(len = out.len(), "index rendered");
    Ok(out)
}

fn back_to_top() -> String {
    format!("<p align=\"right\"><a href=\"{TOC_ANCHOR}\">↑ Back to top</a></p>\n\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn make_entry(name: &str, title: &str, description: &str, categories: &[&str]) -> Entry {
        Entry {
            identifier: Some(name.into()),
            owner: Some("acme".into()),
            title: Some(title.into()),
            description: description.into(),
            link: format!("https://apify.com/acme/{name}"),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn make_ctx() -> RenderContext {
        RenderContext {
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            index_file: "README.md".into(),
            table: TableOptions::default(),
        }
    }

    fn sample_catalog() -> Vec<Entry> {
        vec![
            make_entry("my-actor-5", "My Actor 5", "", &["e_commerce"]),
            make_entry("shop-scraper", "Shop Scraper", "Scrapes shops.", &["e_commerce"]),
            make_entry("lead-finder", "Lead Finder", "Finds leads.", &[]),
        ]
    }

    #[test]
    fn category_pages_resolve_members_and_folders() {
        let catalog = sample_catalog();
        let classification = classify(&catalog);
        let pages = category_pages(&catalog, &classification);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].label.display, "E Commerce");
        assert_eq!(pages[0].folder, "e-commerce-apis-1");
        assert_eq!(pages[0].entries[0].title.as_deref(), Some("Shop Scraper"));
    }

    #[test]
    fn category_document_has_back_links_and_table() {
        let catalog = sample_catalog();
        let classification = classify(&catalog);
        let pages = category_pages(&catalog, &classification);

        let doc = render_category(&pages[0], &make_ctx()).unwrap();
        assert!(doc.starts_with("# E Commerce\n\n"));
        assert!(doc.contains("href=\"../README.md#-table-of-contents\""));
        assert!(doc.contains("**1 APIs in this category**"));
        assert!(doc.contains(
            "| [Shop Scraper](https://apify.com/acme/shop-scraper) | Scrapes shops. |"
        ));
        assert!(doc.ends_with("← Back to main API list</a></p>\n"));
    }

    #[test]
    fn index_embeds_tables_stats_and_uncategorized() {
        let catalog = sample_catalog();
        let classification = classify(&catalog);
        let pages = category_pages(&catalog, &classification);
        let uncategorized = uncategorized_entries(&catalog, &classification);

        let index = render_index(
            &pages,
            &uncategorized,
            classification.total_retained(),
            &make_ctx(),
        )
        .unwrap();

        assert!(index.contains("| **Total APIs** | **2** |"));
        assert!(index.contains("| **Categories** | **1** |"));
        assert!(index.contains("| **Last Updated** | 2026-10-19 |"));
        assert!(index.contains("- [E Commerce](./e-commerce-apis-1/) - 1 APIs"));
        assert!(index.contains("- [Uncategorized](#uncategorized) - 1 APIs"));
        assert!(index.contains("<a id=\"e-commerce\"></a>"));
        assert!(index.contains("[View all →](./e-commerce-apis-1/)"));
        assert!(index.contains("[Shop Scraper]"));
        assert!(index.contains("## Uncategorized"));
        assert!(index.contains("[Lead Finder]"));
        assert!(!index.contains("My Actor 5"));
    }

    #[test]
    fn index_omits_empty_uncategorized_section() {
        let catalog = vec![make_entry("a", "Alpha", "x", &["automation"])];
        let classification = classify(&catalog);
        let pages = category_pages(&catalog, &classification);

        let index = render_index(&pages, &[], 1, &make_ctx()).unwrap();
        assert!(!index.contains("## Uncategorized"));
        assert!(!index.contains("#uncategorized"));
    }

    #[test]
    fn missing_identifier_fails_rendering() {
        let mut entry = make_entry("x", "Orphan", "x", &["automation"]);
        entry.identifier = None;
        let catalog = vec![entry];
        let classification = classify(&catalog);
        let pages = category_pages(&catalog, &classification);

        assert!(render_category(&pages[0], &make_ctx()).is_err());
    }
}
