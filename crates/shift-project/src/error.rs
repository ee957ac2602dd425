use std::path::PathBuf;

use thiserror::Error;

/// Errors from project-level operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not find the @shift-css/core package (set SHIFT_CORE_PATH or install it)")]
    CoreNotFound,

    #[error("could not load component registry '{path}': {message}")]
    Registry { path: PathBuf, message: String },

    #[error(
        "unknown component(s): {}\navailable: {}",
        .names.join(", "),
        .available.join(", ")
    )]
    UnknownComponents {
        names: Vec<String>,
        available: Vec<String>,
    },

    #[error("could not read CSS file for component '{name}': {path}")]
    ComponentCss { name: String, path: PathBuf },

    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

impl ProjectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjectError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Structural problems found by [`validate_css`](crate::transformer::validate_css).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CssError {
    #[error("unexpected closing brace at byte {0}")]
    UnexpectedClosingBrace(usize),

    #[error("unbalanced braces: {0} left open")]
    UnbalancedBraces(usize),
}
