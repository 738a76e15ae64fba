//! CLI error types.

use std::path::PathBuf;

use quizmark_model::LoadError;
use quizmark_render::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("cannot tell quiz format from extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
