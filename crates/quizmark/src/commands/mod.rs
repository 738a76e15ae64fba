//! CLI command implementations.

mod check;
mod render;

use std::path::Path;

pub(crate) use check::CheckArgs;
use quizmark_model::Format;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Pick the quiz format from a file extension.
fn detect_format(path: &Path) -> Result<Format, CliError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
    }
}
