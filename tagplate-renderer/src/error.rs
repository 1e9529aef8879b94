//! Error types for tagplate-renderer.

use std::path::PathBuf;

use thiserror::Error;

use tagplate_core::ConfigError;

/// Faults raised by [`Template::try_render`](crate::Template::try_render).
///
/// [`Template::render`](crate::Template::render) never surfaces these; it
/// folds them into an inline error string instead.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No file exists at the resolved template path.
    #[error("template not found: {relative_path} (resolved to {full_path})")]
    TemplateNotFound {
        relative_path: String,
        full_path: PathBuf,
    },

    /// The template exists but could not be read as text.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template root could not be determined.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
