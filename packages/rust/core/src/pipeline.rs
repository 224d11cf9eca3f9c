//! End-to-end `generate` pipeline: catalog → classify → render → write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use megalist_markdown::TableOptions;
use megalist_shared::{GenerateConfig, Result};

use crate::assembler::{self, OutputLayout};
use crate::classifier;
use crate::loader;
use crate::render::{self, RenderContext};

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path of the written index.
    pub index_path: PathBuf,
    /// Category folders written, in output order.
    pub folders: Vec<String>,
    /// Entries that survived the noise filter.
    pub total_retained: usize,
    /// Entries discarded as placeholders.
    pub filtered_out: usize,
    /// Retained entries without a category.
    pub uncategorized: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

impl GenerateResult {
    pub fn category_count(&self) -> usize {
        self.folders.len()
    }
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each category document is written.
    fn category_written(&self, folder: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn category_written(&self, _folder: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full pipeline, stamping documents with today's (UTC) date.
pub fn generate(
    config: &GenerateConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    generate_on(config, Utc::now().date_naive(), progress)
}

/// Run the full pipeline with an explicit generation date.
///
/// 1. Load the catalog (malformed input aborts before anything is written)
/// 2. Filter noise and group by category
/// 3. Render and write each category document
/// 4. Render and write the index
#[instrument(skip_all, fields(input = %config.input.display(), out = %config.output_dir.display()))]
pub fn generate_on(
    config: &GenerateConfig,
    generated_on: NaiveDate,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();

    progress.phase("Loading catalog");
    let entries = loader::load_catalog(&config.input)?;

    progress.phase("Filtering placeholder entries");
    let classification = classifier::classify(&entries);

    let ctx = RenderContext {
        generated_on,
        index_file: config.index_file.clone(),
        table: TableOptions {
            description_limit: config.description_limit,
        },
    };
    let layout = OutputLayout::from(config);
    let pages = render::category_pages(&entries, &classification);
    let uncategorized = render::uncategorized_entries(&entries, &classification);

    progress.phase("Writing category documents");
    let mut folders = Vec::with_capacity(pages.len());
    for (i, page) in pages.iter().enumerate() {
        let doc = render::render_category(page, &ctx)?;
        assembler::write_category(&layout, &page.folder, &doc)?;
        progress.category_written(&page.folder, i + 1, pages.len());
        folders.push(page.folder.clone());
    }

    progress.phase("Writing index");
    let index = render::render_index(
        &pages,
        &uncategorized,
        classification.total_retained(),
        &ctx,
    )?;
    let index_path = assembler::write_index(&layout, &index)?;

    let result = GenerateResult {
        index_path,
        folders,
        total_retained: classification.total_retained(),
        filtered_out: classification.filtered_out,
        uncategorized: uncategorized.len(),
        elapsed: start.elapsed(),
    };

    info!(
        categories = result.category_count(),
        total = result.total_retained,
        filtered = result.filtered_out,
        uncategorized = result.uncategorized,
        "generation complete"
    );
    progress.done(&result);

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
