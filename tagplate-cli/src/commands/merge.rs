//! `tagplate merge <folder/file>...` — render templates and join them.

use anyhow::Result;
use clap::Args;

use tagplate_renderer::{merge, Template};

use super::super::{RootArgs, TemplatePathArg, ValueArgs};

/// Render each template with the shared values, separator after every one.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Templates to merge, in order, as <folder>/<file>.
    #[arg(required = true, value_name = "FOLDER/FILE")]
    pub templates: Vec<TemplatePathArg>,

    /// Text appended after each rendered template (default: config value or newline).
    #[arg(long)]
    pub separator: Option<String>,

    #[command(flatten)]
    pub root: RootArgs,

    #[command(flatten)]
    pub values: ValueArgs,
}

impl MergeArgs {
    pub fn run(self) -> Result<()> {
        let (root, config) = self.root.resolve()?;
        let shared = self.values.collect()?;
        let separator = self
            .separator
            .as_deref()
            .unwrap_or_else(|| config.separator());

        let templates: Vec<Template> = self
            .templates
            .iter()
            .map(|path| {
                let mut t = Template::new(root.clone(), &path.folder, &path.file);
                t.extend(shared.clone());
                t
            })
            .collect();

        print!("{}", merge(&templates, separator));
        Ok(())
    }
}
