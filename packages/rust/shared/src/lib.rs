//! Shared types, error model, and configuration for the API Mega List generator.
//!
//! This crate is the foundation depended on by all other megalist crates.
//! It provides:
//! - [`CatalogError`]: the unified error type
//! - Domain types ([`Entry`], [`EntryKey`], [`CategoryGroup`], [`Toc`], [`TocEntry`])
//! - Configuration ([`AppConfig`], [`GenerateConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CatalogConfig, GenerateConfig, OutputConfig, RenderConfig, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{CatalogError, Result};
pub use types::{CategoryGroup, Entry, EntryKey, Toc, TocEntry, UNKNOWN_TITLE};
