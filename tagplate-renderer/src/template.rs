//! [`Template`] — one template file plus the values substituted into it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tagplate_core::{EngineConfig, TemplateRoot};

use crate::error::RenderError;
use crate::syntax;

/// Inline text returned by [`Template::render`] when the file cannot be loaded.
pub fn load_error_message(relative_path: &str) -> String {
    format!("Error loading template file ({relative_path}).<br />")
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A template file under a [`TemplateRoot`] and its tag values.
///
/// Construction never touches the filesystem; the file is read on every
/// render, so edits on disk show up without rebuilding the `Template`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    root: TemplateRoot,
    relative_path: String,
    values: BTreeMap<String, String>,
}

impl Template {
    /// Bind `<folder>/<filename>` under `root`.
    pub fn new(root: TemplateRoot, folder: &str, filename: &str) -> Self {
        Template {
            root,
            relative_path: format!("{folder}/{filename}"),
            values: BTreeMap::new(),
        }
    }

    /// Bind `<folder>/<filename>` under the root described by `config`.
    pub fn from_config(
        config: &EngineConfig,
        folder: &str,
        filename: &str,
    ) -> Result<Self, RenderError> {
        Ok(Self::new(config.template_root()?, folder, filename))
    }

    /// Set the value for `[@key]` and `[?if key]`. Last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// [`set`](Self::set) every pair in order.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// The value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// All values, in the order they are substituted.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// `<folder>/<filename>` as given at construction.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// `relative_path` resolved under the template root.
    pub fn full_path(&self) -> PathBuf {
        self.root.resolve(&self.relative_path)
    }

    /// Render the template, folding load failures into an inline message.
    ///
    /// A missing file yields `Error loading template file (<folder>/<file>).<br />`
    /// so a broken sub-template still produces text when nested in a parent.
    pub fn render(&self) -> String {
        match self.try_render() {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(template = %self.relative_path, error = %err, "template render failed");
                load_error_message(&self.relative_path)
            }
        }
    }

    /// Render the template, returning load failures as [`RenderError`].
    pub fn try_render(&self) -> Result<String, RenderError> {
        let full_path = self.full_path();
        let source = self.load(&full_path)?;
        tracing::debug!(
            template = %self.relative_path,
            bytes = source.len(),
            values = self.values.len(),
            "rendering template"
        );
        Ok(syntax::render_source(&source, &self.values))
    }

    fn load(&self, full_path: &Path) -> Result<String, RenderError> {
        if !full_path.exists() {
            return Err(RenderError::TemplateNotFound {
                relative_path: self.relative_path.clone(),
                full_path: full_path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(full_path).map_err(|source| RenderError::Io {
            path: full_path.to_path_buf(),
            source,
        })?;
        // Non-UTF-8 bytes (legacy Latin-1 templates) become U+FFFD.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
