//! Catalog loader.
//!
//! Reads the JSON catalog (an array of listing objects) into [`Entry`]
//! values. Only the shape is checked: the top level must be an array and
//! every element an object. Missing or empty optional fields get defaults.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use megalist_shared::{CatalogError, Entry, Result};

/// Wire shape of one catalog record. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    title: Option<String>,
    name: Option<String>,
    username: Option<String>,
    description: Option<String>,
    url: Option<String>,
    affiliate_url: Option<String>,
    categories: Option<Vec<String>>,
}

impl From<RawRecord> for Entry {
    fn from(raw: RawRecord) -> Self {
        Entry {
            identifier: non_empty(raw.name),
            owner: non_empty(raw.username),
            title: non_empty(raw.title),
            description: raw.description.unwrap_or_default(),
            link: non_empty(raw.affiliate_url)
                .or_else(|| non_empty(raw.url))
                .unwrap_or_default(),
            categories: raw.categories.unwrap_or_default(),
        }
    }
}

/// Load and parse the catalog file at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<Vec<Entry>> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let entries = parse_catalog(&content)?;
    info!(count = entries.len(), "catalog loaded");
    Ok(entries)
}

/// Parse catalog JSON text into entries, preserving source order.
pub fn parse_catalog(json: &str) -> Result<Vec<Entry>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CatalogError::malformed(format!("invalid JSON: {e}")))?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(CatalogError::malformed(format!(
                "expected a JSON array of records, found {}",
                kind_of(&other)
            )));
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if !record.is_object() {
                return Err(CatalogError::malformed(format!(
                    "record #{index} is {}, expected an object",
                    kind_of(&record)
                )));
            }
            let raw: RawRecord = serde_json::from_value(record).map_err(|e| {
                CatalogError::malformed(format!("record #{index} has an invalid field: {e}"))
            })?;
            Ok(Entry::from(raw))
        })
        .collect::<Result<Vec<_>>>()
        .inspect(|entries| debug!(count = entries.len(), "records parsed"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
