//! Document rendering and persistence.
//! Combines the built-in template with a rendering engine and writes the
//! result to its destination.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::{context, README_TEMPLATE};

/// Renders the built-in README template.
///
/// # Arguments
/// * `engine` - Rendering engine used for placeholder substitution
///
/// # Returns
/// * `Result<String>` - The rendered document
///
/// # Errors
/// * `Error::Template` if the engine fails to render
pub fn render_document(engine: &dyn TemplateRenderer) -> Result<String> {
    engine.render(README_TEMPLATE, &context())
}

/// Writes a rendered document to `path`, truncating any existing content.
///
/// The destination's parent directory must already exist; a missing parent
/// surfaces as a storage error like any other write failure. The storage
/// handle is released on every exit path before control returns.
///
/// # Arguments
/// * `path` - Destination file
/// * `content` - The full document to persist
///
/// # Errors
/// * `Error::Storage` if the destination cannot be opened or written
pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    fs::write(path.as_ref(), content).map_err(Error::Storage)
}
