//! Render quiz sources to HTML documents.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use quizmark_model::load_quizzes_str;
use quizmark_render::{QuizRenderer, RenderOptions};

use super::detect_format;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Quiz source file (.yaml, .yml or .json).
    pub file: PathBuf,

    /// Annotate answers with correctness and explanations.
    #[arg(long)]
    pub solutions: bool,

    /// Emit each question's tags.
    #[arg(long)]
    pub show_tags: bool,

    /// Stylesheet URL linked from the built-in document shell.
    #[arg(long)]
    pub css: Option<String>,

    /// Template file with a `{{ questions }}` expansion point.
    #[arg(long, short)]
    pub template: Option<PathBuf>,

    /// Output file (defaults to stdout).
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let format = detect_format(&self.file)?;
        let text = fs::read_to_string(&self.file)?;
        let quizzes = load_quizzes_str(&text, format)?;
        tracing::info!(count = quizzes.len(), file = %self.file.display(), "Loaded quizzes");

        // Template text is loaded here; the render core only sees in-memory
        // source.
        let template = self
            .template
            .as_deref()
            .map(fs::read_to_string)
            .transpose()?;

        let renderer = QuizRenderer::new(RenderOptions {
            template,
            css: self.css,
            solutions: self.solutions,
            show_tags: self.show_tags,
        });

        // One complete standalone document per quiz in the source.
        let mut documents = Vec::with_capacity(quizzes.len());
        for quiz in &quizzes {
            documents.push(renderer.render(quiz)?);
        }
        let rendered = documents.join("\n");

        match &self.output {
            Some(path) => {
                fs::write(path, &rendered)?;
                output.success(&format!(
                    "Rendered {} quiz(es) to {}",
                    quizzes.len(),
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
