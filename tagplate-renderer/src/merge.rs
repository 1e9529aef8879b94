//! Concatenate rendered templates with a separator.

use std::fmt;

use crate::template::Template;

pub use tagplate_core::DEFAULT_SEPARATOR;

/// Inline text emitted in place of a part that is not a template.
pub const TYPE_ERROR: &str = "Error, incorrect type - expected Template.";

/// One element of a mixed merge sequence.
#[derive(Debug, Clone, Copy)]
pub enum Part<'a> {
    Template(&'a Template),
    /// Anything else; the string describes what was supplied.
    Other(&'a str),
}

impl<'a> From<&'a Template> for Part<'a> {
    fn from(template: &'a Template) -> Self {
        Part::Template(template)
    }
}

impl fmt::Display for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Template(t) => write!(f, "template {}", t.relative_path()),
            Part::Other(what) => write!(f, "{what}"),
        }
    }
}

impl Part<'_> {
    fn render(&self) -> String {
        match self {
            Part::Template(t) => t.render(),
            Part::Other(what) => {
                tracing::warn!(part = %what, "merge part is not a template");
                TYPE_ERROR.to_string()
            }
        }
    }
}

/// Render each template and append `separator` after every output, including
/// the last.
pub fn merge<'a, I>(templates: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a Template>,
{
    merge_parts(templates.into_iter().map(Part::from), separator)
}

/// [`merge`] over a mixed sequence; non-template parts become [`TYPE_ERROR`].
pub fn merge_parts<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = Part<'a>>,
{
    let mut output = String::new();
    for part in parts {
        output.push_str(&part.render());
        output.push_str(separator);
    }
    output
}
