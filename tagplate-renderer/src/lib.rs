//! # tagplate-renderer
//!
//! File-based `[@tag]` templates with `[?if tag]...[?fi]` conditionals and
//! separator-joined merging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tagplate_core::TemplateRoot;
//! use tagplate_renderer::{merge, Template};
//!
//! let root = TemplateRoot::from_document_root("/srv/www");
//! let header = Template::new(root.clone(), "common", "header.tpl");
//! let mut layout = Template::new(root.clone(), "common", "layout.tpl");
//! layout.set("header", header.render());
//! layout.set("title", "Home");
//!
//! let footer = Template::new(root, "common", "footer.tpl");
//! print!("{}", merge([&layout, &footer], "\n"));
//! ```

pub mod error;
pub mod merge;
pub mod syntax;
pub mod template;

pub use error::RenderError;
pub use merge::{merge, merge_parts, Part, DEFAULT_SEPARATOR, TYPE_ERROR};
pub use syntax::render_source;
pub use template::{load_error_message, Template};
