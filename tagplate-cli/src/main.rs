//! tagplate — render `[@tag]` templates from the command line.
//!
//! # Usage
//!
//! ```text
//! tagplate render <folder> <file> [--root DIR | --document-root DIR | --config FILE]
//!                 [--set key=value]... [--values FILE] [--nest key=folder/file]... [--strict]
//! tagplate merge <folder/file>... [--separator SEP] [root options] [--set ...] [--values FILE]
//! ```

mod commands;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use commands::{merge::MergeArgs, render::RenderArgs};
use tagplate_core::{values, EngineConfig, TemplateRoot};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tagplate",
    version,
    about = "Render file-based [@tag] templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one template to stdout.
    Render(RenderArgs),

    /// Render several templates and join them with a separator.
    Merge(MergeArgs),
}

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

/// Where templates are resolved from. First match wins; `$DOCUMENT_ROOT` is the fallback.
#[derive(Args, Debug, Default)]
pub struct RootArgs {
    /// Directory that directly contains template folders.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Document root; templates are read from <DIR>/templates.
    #[arg(long, value_name = "DIR", conflicts_with = "root")]
    pub document_root: Option<PathBuf>,

    /// YAML engine config (document_root, templates_dir, separator).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RootArgs {
    /// Resolve the template root and the config it came with.
    pub fn resolve(&self) -> Result<(TemplateRoot, EngineConfig)> {
        let config = match &self.config {
            Some(path) => EngineConfig::load_at(path)
                .with_context(|| format!("cannot load config '{}'", path.display()))?,
            None => EngineConfig::default(),
        };
        let root = if let Some(dir) = &self.root {
            TemplateRoot::new(dir)
        } else if let Some(doc_root) = &self.document_root {
            TemplateRoot::from_document_root(doc_root)
        } else {
            config
                .template_root()
                .context("no template root; pass --root, --document-root or --config")?
        };
        tracing::debug!(root = %root.dir().display(), "resolved template root");
        Ok((root, config))
    }
}

/// Tag values shared by every template the command renders.
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// YAML mapping of tag name to value, applied before --set.
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Set a tag value (repeatable).
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl ValueArgs {
    pub fn collect(&self) -> Result<BTreeMap<String, String>> {
        let mut out = match &self.values {
            Some(path) => values::load_values_at(path)
                .with_context(|| format!("cannot load values '{}'", path.display()))?,
            None => BTreeMap::new(),
        };
        for raw in &self.set {
            let (key, value) = values::parse_assignment(raw)?;
            out.insert(key, value);
        }
        Ok(out)
    }
}

/// `folder/file` template reference; the folder is everything before the last `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePathArg {
    pub folder: String,
    pub file: String,
}

impl FromStr for TemplatePathArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.rsplit_once('/') {
            Some((folder, file)) if !folder.is_empty() && !file.is_empty() => Ok(Self {
                folder: folder.to_owned(),
                file: file.to_owned(),
            }),
            _ => Err(format!("invalid template '{s}'; expected <folder>/<file>")),
        }
    }
}

impl fmt::Display for TemplatePathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.folder, self.file)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Merge(args) => args.run(),
    }
}
