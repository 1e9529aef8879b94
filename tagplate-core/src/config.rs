//! Template-root configuration.
//!
//! # Resolution
//!
//! ```text
//! <document_root>/
//!   templates/              (TemplateRoot)
//!     <folder>/<file>       (one Template)
//! ```
//!
//! # API pattern
//!
//! The root is always explicit. [`TemplateRoot::from_env`] is the only place
//! that reads ambient state (`$DOCUMENT_ROOT`); everything else takes a path.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ConfigError};

/// Subdirectory of the document root that holds templates.
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable consulted by [`TemplateRoot::from_env`].
pub const DOCUMENT_ROOT_ENV: &str = "DOCUMENT_ROOT";

/// Separator used by merge when none is configured.
pub const DEFAULT_SEPARATOR: &str = "\n";

// ---------------------------------------------------------------------------
// TemplateRoot
// ---------------------------------------------------------------------------

/// Base directory under which every template path is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRoot {
    dir: PathBuf,
}

impl TemplateRoot {
    /// Use `dir` as the template root as-is.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<doc_root>/templates`.
    pub fn from_document_root(doc_root: impl AsRef<Path>) -> Self {
        Self::new(doc_root.as_ref().join(TEMPLATES_DIR))
    }

    /// `$DOCUMENT_ROOT/templates`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(DOCUMENT_ROOT_ENV) {
            Some(doc_root) if !doc_root.is_empty() => Ok(Self::from_document_root(doc_root)),
            _ => Err(ConfigError::MissingDocumentRoot),
        }
    }

    /// The root directory itself.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append `relative` under the root — pure, no I/O.
    ///
    /// Leading `/` and drive prefixes are dropped, so an absolute `relative`
    /// still lands inside the root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let mut path = self.dir.clone();
        for component in relative.as_ref().components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => path.push(other),
            }
        }
        path
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// On-disk engine configuration (YAML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Document root; templates live under `<document_root>/templates`.
    pub document_root: Option<PathBuf>,
    /// Explicit template directory. Wins over `document_root`.
    pub templates_dir: Option<PathBuf>,
    /// Separator for merged output.
    pub separator: Option<String>,
}

impl EngineConfig {
    /// Load a config file.
    ///
    /// Returns `ConfigError::NotFound` if absent and `ConfigError::Parse`
    /// (with path + line context) if malformed.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `templates_dir`, else `document_root/templates`, else `$DOCUMENT_ROOT/templates`.
    pub fn template_root(&self) -> Result<TemplateRoot, ConfigError> {
        if let Some(dir) = &self.templates_dir {
            return Ok(TemplateRoot::new(dir));
        }
        if let Some(doc_root) = &self.document_root {
            return Ok(TemplateRoot::from_document_root(doc_root));
        }
        TemplateRoot::from_env()
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_root_gets_templates_suffix() {
        let root = TemplateRoot::from_document_root("/srv/www");
        assert_eq!(root.dir(), Path::new("/srv/www/templates"));
    }

    #[test]
    fn resolve_joins_relative_path() {
        let root = TemplateRoot::new("/srv/www/templates");
        assert_eq!(
            root.resolve("common/layout.tpl"),
            PathBuf::from("/srv/www/templates/common/layout.tpl")
        );
    }

    #[test]
    fn resolve_keeps_absolute_relative_under_root() {
        let root = TemplateRoot::new("/srv/www/templates");
        assert_eq!(
            root.resolve("/etc/passwd"),
            PathBuf::from("/srv/www/templates/etc/passwd")
        );
        assert_eq!(
            root.resolve("/layout.tpl"),
            PathBuf::from("/srv/www/templates/layout.tpl")
        );
    }

    #[test]
    fn templates_dir_wins_over_document_root() {
        let cfg = EngineConfig {
            document_root: Some(PathBuf::from("/srv/www")),
            templates_dir: Some(PathBuf::from("/opt/tpl")),
            separator: None,
        };
        let root = cfg.template_root().expect("root");
        assert_eq!(root.dir(), Path::new("/opt/tpl"));
    }

    #[test]
    fn separator_defaults_to_newline() {
        assert_eq!(EngineConfig::default().separator(), "\n");
    }
}
