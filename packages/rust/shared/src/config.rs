//! Application configuration for the megalist generator.
//!
//! An optional `megalist.toml` in the working directory supplies overrides.
//! CLI flags override config file values, which override defaults. With no
//! file and no flags the generator reads `apify_actors.json` and writes into
//! the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "megalist.toml";

// ---------------------------------------------------------------------------
// Config structs (matching megalist.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog input.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Output locations.
    #[serde(default)]
    pub output: OutputConfig,

    /// Rendering knobs.
    #[serde(default)]
    pub render: RenderConfig,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file.
    #[serde(default = "default_input")]
    pub input: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
        }
    }
}

fn default_input() -> String {
    "apify_actors.json".into()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for the index and category folders.
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// File name used for the index and every category document.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index_file: default_index_file(),
        }
    }
}

fn default_output_dir() -> String {
    ".".into()
}
fn default_index_file() -> String {
    "README.md".into()
}

/// `[render]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Maximum description length (in characters) before truncation.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
        }
    }
}

fn default_description_limit() -> usize {
    200
}

// ---------------------------------------------------------------------------
// Generate config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime generation settings, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Catalog file to load.
    pub input: PathBuf,
    /// Root directory for all output.
    pub output_dir: PathBuf,
    /// File name for the index and per-category documents.
    pub index_file: String,
    /// Description truncation limit in characters.
    pub description_limit: usize,
}

impl From<&AppConfig> for GenerateConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            input: PathBuf::from(&config.catalog.input),
            output_dir: PathBuf::from(&config.output.dir),
            index_file: config.output.index_file.clone(),
            description_limit: config.render.description_limit,
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Path of the config file inside `dir`.
pub fn config_file_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load `megalist.toml` from `dir`. Returns defaults if the file does not exist.
pub fn load_config(dir: &Path) -> Result<AppConfig> {
    let path = config_file_path(dir);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        CatalogError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    if config.render.description_limit == 0 {
        return Err(CatalogError::config(
            "render.description_limit must be greater than zero",
        ));
    }

    Ok(config)
}

/// Write a default config file into `dir`. Returns the path to the created file.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;

    let path = config_file_path(dir);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CatalogError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CatalogError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("apify_actors.json"));
        assert!(toml_str.contains("description_limit"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.render.description_limit, 200);
        assert_eq!(parsed.output.index_file, "README.md");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let toml_str = r#"
[output]
dir = "/tmp/megalist"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.output.dir, "/tmp/megalist");
        assert_eq!(config.output.index_file, "README.md");
        assert_eq!(config.catalog.input, "apify_actors.json");
    }

    #[test]
    fn generate_config_from_app_config() {
        let generate = GenerateConfig::default();
        assert_eq!(generate.input, PathBuf::from("apify_actors.json"));
        assert_eq!(generate.output_dir, PathBuf::from("."));
        assert_eq!(generate.description_limit, 200);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = std::env::temp_dir()
            .join(format!("megalist-config-test-missing-{}", uuid::Uuid::now_v7()));
        let config = load_config(&dir).expect("defaults");
        assert_eq!(config.catalog.input, "apify_actors.json");
    }

    #[test]
    fn zero_description_limit_is_rejected() {
        let dir = std::env::temp_dir()
            .join(format!("megalist-config-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = config_file_path(&dir);
        std::fs::write(&path, "[render]\ndescription_limit = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("description_limit"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
