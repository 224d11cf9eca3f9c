//! Output writer.
//!
//! Places rendered documents on disk:
//! ```text
//! <output_root>/
//! ├── README.md                       (index)
//! ├── ai-scrapers-apis-42/
//! │   └── README.md
//! └── e-commerce-apis-7/
//!     └── README.md
//! ```
//! Every write overwrites, so re-running a generation is idempotent.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use megalist_shared::{CatalogError, GenerateConfig, Result};

/// Where documents of one run are written.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Root directory for the index and category folders.
    pub root: PathBuf,
    /// File name of the index and of each category document.
    pub index_file: String,
}

impl OutputLayout {
    /// Path of the master index.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    /// Path of the document inside a category folder.
    pub fn category_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder).join(&self.index_file)
    }
}

impl From<&GenerateConfig> for OutputLayout {
    fn from(config: &GenerateConfig) -> Self {
        Self {
            root: config.output_dir.clone(),
            index_file: config.index_file.clone(),
        }
    }
}

/// Write (overwrite) the master index.
#[instrument(skip_all, fields(root = %layout.root.display()))]
pub fn write_index(layout: &OutputLayout, content: &str) -> Result<PathBuf> {
    let path = layout.index_path();
    write_document(&path, content)?;
    Ok(path)
}

/// Write (overwrite) a category document, creating its folder if needed.
#[instrument(skip(layout, content))]
pub fn write_category(layout: &OutputLayout, folder: &str, content: &str) -> Result<PathBuf> {
    let path = layout.category_path(folder);
    write_document(&path, content)?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Write one Markdown file, creating parent directories if needed.
fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }

    std::fs::write(path, content).map_err(|e| CatalogError::io(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
