//! `tagplate render <folder> <file>` — render one template to stdout.

use anyhow::{Context, Result};
use clap::Args;

use tagplate_core::values;
use tagplate_renderer::Template;

use super::super::{RootArgs, TemplatePathArg, ValueArgs};

/// Render one template, optionally filling tags with nested sub-templates.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Folder under the template root (e.g. "common").
    pub folder: String,

    /// Template file inside the folder (e.g. "layout.tpl").
    pub file: String,

    #[command(flatten)]
    pub root: RootArgs,

    #[command(flatten)]
    pub values: ValueArgs,

    /// Render <folder>/<file> and use its output as the value of KEY (repeatable).
    #[arg(long, value_name = "KEY=FOLDER/FILE")]
    pub nest: Vec<String>,

    /// Fail instead of printing an inline error when a template is missing.
    #[arg(long)]
    pub strict: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let (root, _config) = self.root.resolve()?;
        let shared = self.values.collect()?;

        let mut template = Template::new(root.clone(), &self.folder, &self.file);
        template.extend(shared.clone());

        for raw in &self.nest {
            let (key, target) = values::parse_assignment(raw)?;
            let target: TemplatePathArg = target
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid --nest '{raw}'"))?;
            let mut nested = Template::new(root.clone(), &target.folder, &target.file);
            nested.extend(shared.clone());
            let output = self.output(&nested)?;
            template.set(key, output);
        }

        print!("{}", self.output(&template)?);
        Ok(())
    }

    fn output(&self, template: &Template) -> Result<String> {
        if self.strict {
            template
                .try_render()
                .with_context(|| format!("cannot render '{}'", template.relative_path()))
        } else {
            Ok(template.render())
        }
    }
}
