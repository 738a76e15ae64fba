//! Quiz document rendering.

use quizmark_model::Quiz;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::RenderError;
use crate::layout::{DefaultLayout, DocumentLayout, QuizMeta, TemplateLayout};
use crate::question::QuestionRenderer;
use crate::sink::MarkupSink;

/// Rendering options.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// External template source text. When unset the built-in shell is used.
    pub template: Option<String>,
    /// Stylesheet reference linked from the built-in shell's head.
    pub css: Option<String>,
    /// Annotate answers with correctness and explanations.
    pub solutions: bool,
    /// Emit a tags block per question.
    pub show_tags: bool,
}

/// Renders one quiz at a time to a standalone document.
///
/// One [`render`](Self::render) call owns its output buffer for the call's
/// duration; renders never share state, and identical seed plus options
/// reproduce identical output.
pub struct QuizRenderer {
    layout: Box<dyn DocumentLayout>,
    solutions: bool,
    show_tags: bool,
}

impl QuizRenderer {
    /// Create a renderer from options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        let layout: Box<dyn DocumentLayout> = match options.template {
            Some(source) => Box::new(TemplateLayout::new(source)),
            None => Box::new(DefaultLayout::new(options.css)),
        };
        Self {
            layout,
            solutions: options.solutions,
            show_tags: options.show_tags,
        }
    }

    /// Create a renderer with a custom document layout.
    #[must_use]
    pub fn with_layout(layout: Box<dyn DocumentLayout>, options: &RenderOptions) -> Self {
        Self {
            layout,
            solutions: options.solutions,
            show_tags: options.show_tags,
        }
    }

    /// Render `quiz` to a complete document.
    pub fn render(&self, quiz: &Quiz) -> Result<String, RenderError> {
        tracing::debug!(
            title = %quiz.title,
            questions = quiz.num_questions(),
            solutions = self.solutions,
            "Rendering quiz"
        );
        let questions = self.render_questions(quiz)?;
        self.layout.assemble(&QuizMeta::from(quiz), &questions)
    }

    /// Produce the question-list markup: the seed comment pinning visible
    /// randomness, then the ordered question list.
    fn render_questions(&self, quiz: &Quiz) -> Result<String, RenderError> {
        let mut sink = MarkupSink::new();
        sink.comment(&format!("Seed: {}", quiz.seed))?;
        sink.open("ol", &[("class", "questions")])?;
        {
            let mut renderer = QuestionRenderer::new(&mut sink, self.solutions, self.show_tags);
            for (ordinal, question) in quiz.questions.iter().enumerate() {
                let mut rng = question_rng(quiz.seed, ordinal);
                renderer.render(question, ordinal, &mut rng)?;
            }
        }
        sink.close("ol")?;
        sink.into_markup()
    }
}

/// Per-question shuffle generator.
///
/// Mixes the quiz seed with the question ordinal so each question's answer
/// order is reproducible in isolation and independent of its neighbours.
fn question_rng(seed: u64, ordinal: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (ordinal as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
