//! Unified error types for the macrolab toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during macrolab operations.
#[derive(Error, Debug)]
pub enum MacrolabError {
    // --- Parameters ---

    /// The parameter override file passed via `--params-file` was not found.
    #[error("params file not found at {path}")]
    ParamsFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parameter overrides exist but contain invalid JSON.
    #[error("failed to parse params JSON")]
    ParamsParse {
        #[source]
        source: serde_json::Error,
    },

    /// The parameter overrides parsed as JSON but are not an object.
    #[error("params JSON must be an object of name/value pairs")]
    ParamsNotObject,

    // --- Rendering ---

    /// The template text is not valid template syntax.
    #[error("template syntax error: {0}")]
    TemplateSyntax(String),

    /// The template referenced a variable that is not present in the context
    /// while rendering under strict-undefined evaluation.
    #[error("undefined template variable: {0}")]
    UndefinedVariable(String),

    /// Template rendering failed for a reason other than syntax or an
    /// undefined variable.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<minijinja::Error> for MacrolabError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => Self::TemplateSyntax(err.to_string()),
            minijinja::ErrorKind::UndefinedError => Self::UndefinedVariable(err.to_string()),
            _ => Self::TemplateRender(err.to_string()),
        }
    }
}

/// Alias for `Result<T, MacrolabError>`.
pub type Result<T> = std::result::Result<T, MacrolabError>;
