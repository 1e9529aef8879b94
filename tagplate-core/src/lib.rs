//! tagplate core library — template-root configuration, value files, errors.
//!
//! - [`config`] — [`TemplateRoot`] and the YAML [`EngineConfig`]
//! - [`values`] — tag values from YAML files and `key=value` pairs
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod values;

pub use config::{EngineConfig, TemplateRoot, DEFAULT_SEPARATOR};
pub use error::ConfigError;
