//! Index table of contents.
//!
//! One line per category folder plus an anchor link to the uncategorized
//! section, each with its entry count.

use tracing::{debug, instrument};

use megalist_markdown::format_count;
use megalist_shared::{Toc, TocEntry};

use crate::render::CategoryPage;

/// Heading of the TOC section in the index.
pub const TOC_HEADING: &str = "## 📚 Table of Contents";

/// GitHub's anchor for [`TOC_HEADING`] (the emoji is dropped, leaving a
/// leading hyphen).
pub const TOC_ANCHOR: &str = "#-table-of-contents";

/// Anchor id of the uncategorized section.
pub const UNCATEGORIZED_ANCHOR: &str = "uncategorized";

/// Build the TOC from the category pages (already in output order).
#[instrument(skip(pages), fields(categories = pages.len()))]
pub fn build_toc(pages: &[CategoryPage<'_>], uncategorized: usize) -> Toc {
    let mut sections: Vec<TocEntry> = pages
        .iter()
        .map(|page| TocEntry {
            title: page.label.display.clone(),
            href: format!("./{}/", page.folder),
            count: page.entries.len(),
        })
        .collect();

    if uncategorized > 0 {
        sections.push(TocEntry {
            title: "Uncategorized".into(),
            href: format!("#{UNCATEGORIZED_ANCHOR}"),
            count: uncategorized,
        });
    }

    debug!(sections = sections.len(), "TOC built");
    Toc { sections }
}

/// Render the TOC section as a Markdown bullet list under [`TOC_HEADING`].
pub fn render_toc(toc: &Toc) -> String {
    let mut out = format!("{TOC_HEADING}\n\n");
    for entry in &toc.sections {
        out.push_str(&format!(
            "- [{}]({}) - {} APIs\n",
            entry.title,
            entry.href,
            format_count(entry.count)
        ));
    }
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
