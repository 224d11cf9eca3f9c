//! Error types for the megalist generator.
//!
//! Library crates use [`CatalogError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for every stage of a generation run.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog source is not a sequence of record-like objects.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// An entry reached the renderer without its identifier.
    #[error("render error: {message}")]
    Render { message: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a malformed-input error from any displayable message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: msg.into(),
        }
    }

    /// Create a render error from any displayable message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = CatalogError::malformed("expected a JSON array");
        assert_eq!(err.to_string(), "malformed input: expected a JSON array");

        let err = CatalogError::render("entry #3 has no identifier");
        assert!(err.to_string().contains("entry #3"));
    }

    #[test]
    fn io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CatalogError::io("/readonly/README.md", source);
        let msg = err.to_string();
        assert!(msg.contains("/readonly/README.md"));
        assert!(msg.contains("denied"));
    }
}
