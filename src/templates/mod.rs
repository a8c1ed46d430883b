//! Template reference resolution and discovery.
//!
//! Templates are searched across two roots: a user-writable custom root
//! that always shadows the bundled root installed with the tool.

mod lister;
mod locator;
mod reference;
mod roots;

pub use lister::{TemplateListing, list_templates};
pub use locator::resolve;
pub use reference::{Provenance, TemplateLocation, TemplateRef};
pub use roots::TemplateRoots;

/// File extension marking a file as a template
pub const TEMPLATE_EXTENSION: &str = "tera";
