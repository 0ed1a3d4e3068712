//! Template rendering engine for scribe.
//! The README document is produced through a rendering seam so that the
//! emitter never depends on a concrete engine.

use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaEngine {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinjaEngine instance.
    ///
    /// The environment keeps trailing newlines: rendered output must stay
    /// byte-identical to the template outside placeholder substitutions.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        MiniJinjaEngine::new()
    }
}

impl TemplateRenderer for MiniJinjaEngine {
    /// Renders a template string using MiniJinja.
    ///
    /// Substitution is a single pass: text inserted for one placeholder is
    /// never re-scanned for further placeholders.
    ///
    /// # Errors
    /// * `Error::Template` if rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::Template)
    }
}
