//! MiniJinja-based template renderer for macro bodies.
//!
//! Wraps a [`minijinja::Environment`] with **strict undefined behavior** by
//! default. Strict mode ensures that any `{{ variable }}` referenced in a
//! template must be present in the data context; otherwise rendering
//! returns an error. This matters because the rendered output is a stream
//! of machine-control commands, and a silently missing parameter would emit
//! a malformed command far from the actual cause.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "BED_TEMP": 60 });
//! let output = renderer.render("M140 S{{ BED_TEMP }}", &data)?;
//! ```

use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;

use crate::error::{MacrolabError, Result};

/// Template renderer for macro bodies.
///
/// [`TemplateRenderer::new`] enables strict undefined behavior so that any
/// template variable not present in the data context causes an error rather
/// than silently rendering as empty. Templates that guard every lookup with
/// `|default(...)` still render fine under strict mode; the guard supplies
/// the value before it is used.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with strict undefined behavior.
    ///
    /// Referencing an unset variable returns
    /// [`MacrolabError::UndefinedVariable`] instead of an empty string.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    /// Create a renderer where unset variables render as empty strings.
    ///
    /// Used by the debug harness, whose templates default-guard every
    /// parameter access anyway.
    pub fn lenient() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    /// Render a template string with the given data context.
    ///
    /// Engine failures are classified into [`MacrolabError::TemplateSyntax`],
    /// [`MacrolabError::UndefinedVariable`], or the generic
    /// [`MacrolabError::TemplateRender`], so callers can tell a template
    /// typo apart from a missing parameter.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.env
            .render_str(template, data)
            .map_err(MacrolabError::from)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
