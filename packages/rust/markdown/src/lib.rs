//! Markdown table rendering for catalog entries.
//!
//! Turns [`Entry`] values into `| API Name | Description |` rows. Titles are
//! cleaned, descriptions truncated, and both escaped for table cells before
//! they reach the output.

pub mod cleanup;
pub mod collate;
pub mod label;

use tracing::{instrument, trace};

use megalist_shared::{CatalogError, Entry, Result};

pub use cleanup::{clean_title, escape_cell, truncate_description};
pub use collate::{locale_cmp, sort_by_locale};
pub use label::{CategoryLabel, slugify};

/// Header and separator lines emitted above every entry table.
pub const TABLE_HEADER: &str = "| API Name | Description |\n|----------|-------------|\n";

/// Placeholder shown in the description column when there is nothing to show.
const EMPTY_CELL: &str = "-";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Options controlling how entry rows are rendered.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Description truncation limit in characters.
    pub description_limit: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            description_limit: 200,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render one table row for `entry`.
///
/// Fails only when the entry has no identifier, which the loader never
/// produces for well-formed catalogs.
pub fn table_row(entry: &Entry, opts: &TableOptions) -> Result<String> {
    if entry.identifier.is_none() {
        return Err(CatalogError::render(format!(
            "entry titled {:?} has no identifier",
            entry.display_title()
        )));
    }

    let title = escape_cell(&clean_title(entry.display_title()));
    let description = escape_cell(&truncate_description(
        &entry.description,
        opts.description_limit,
    ));
    let description = if description.is_empty() {
        EMPTY_CELL
    } else {
        description.as_str()
    };

    Ok(format!("| [{title}]({}) | {description} |", entry.link))
}

/// Render a full table (header + rows) for `entries`, sorted by title.
///
/// The sort is stable, so entries with the same title keep their input order.
#[instrument(skip_all, fields(rows = entries.len()))]
pub fn render_table(entries: &[&Entry], opts: &TableOptions) -> Result<String> {
    let mut sorted = entries.to_vec();
    sort_by_locale(&mut sorted, |entry| entry.display_title());

    let mut table = String::from(TABLE_HEADER);
    for entry in sorted {
        table.push_str(&table_row(entry, opts)?);
        table.push('\n');
    }

    trace!(len = table.len(), "table rendered");
    Ok(table)
}

/// Format a count with `,` thousands separators (`12345` → `12,345`).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
