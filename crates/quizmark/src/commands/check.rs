//! Validate quiz sources and print a summary.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use quizmark_model::load_quizzes_str;

use super::detect_format;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `check` command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Quiz source file (.yaml, .yml or .json).
    pub file: PathBuf,

    /// Enable verbose logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let format = detect_format(&self.file)?;
        let text = fs::read_to_string(&self.file)?;
        let quizzes = load_quizzes_str(&text, format)?;

        for quiz in &quizzes {
            output.info(&format!(
                "{}: {} questions, {} points",
                quiz.title,
                quiz.num_questions(),
                quiz.points()
            ));
        }
        output.success(&format!("OK ({} quiz(es))", quizzes.len()));
        Ok(())
    }
}
