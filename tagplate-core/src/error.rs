//! Error types for tagplate-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading configuration or value files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem error while reading a config or value file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config or value file did not exist at the expected path.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Neither an explicit root nor `$DOCUMENT_ROOT` was available.
    #[error("cannot determine template root; set $DOCUMENT_ROOT or pass a root directory")]
    MissingDocumentRoot,

    /// A value file entry was a sequence or mapping instead of a scalar.
    #[error("value for '{key}' must be a scalar")]
    InvalidValue { key: String },

    /// A `key=value` assignment could not be split.
    #[error("invalid assignment '{input}'; expected key=value")]
    InvalidAssignment { input: String },
}

/// Convenience constructor for [`ConfigError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}
