//! Document assembly: built-in shell or external template.
//!
//! Both assembly paths implement [`DocumentLayout`] and consume the same
//! question-list markup, produced exactly once per render by the quiz
//! renderer.

use quizmark_model::Quiz;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{RenderError, TemplateError};
use crate::sink::MarkupSink;

/// Read-only quiz metadata exposed to document layouts.
///
/// Templates see `title`, `num_questions` and `points`; `instructions` is
/// only consumed by the built-in shell.
#[derive(Clone, Debug, Serialize)]
pub struct QuizMeta {
    /// Quiz title.
    pub title: String,
    /// Total number of questions.
    pub num_questions: usize,
    /// Total point value.
    pub points: f64,
    /// Free-text instructions from the quiz options.
    #[serde(skip)]
    pub instructions: Option<String>,
}

impl From<&Quiz> for QuizMeta {
    fn from(quiz: &Quiz) -> Self {
        Self {
            title: quiz.title.clone(),
            num_questions: quiz.num_questions(),
            points: quiz.points(),
            instructions: quiz.options.instructions.clone(),
        }
    }
}

/// Document assembly strategy.
pub trait DocumentLayout {
    /// Wrap the question-list markup in a complete standalone document.
    fn assemble(&self, meta: &QuizMeta, questions: &str) -> Result<String, RenderError>;
}

/// Built-in minimal document shell: head with title and optional stylesheet
/// link, body with the student-name header, optional instructions and the
/// question list.
pub struct DefaultLayout {
    css: Option<String>,
}

impl DefaultLayout {
    /// Create a shell, optionally linking `css` from the head.
    #[must_use]
    pub fn new(css: Option<String>) -> Self {
        Self { css }
    }

    /// Student name block and optional quiz instructions.
    fn quiz_header(&self, sink: &mut MarkupSink, meta: &QuizMeta) -> Result<(), RenderError> {
        sink.open("div", &[("id", "student-name")])?;
        sink.text_element("p", &[], "Name:")?;
        sink.text_element("p", &[], "Student ID:")?;
        sink.close("div")?;
        if let Some(instructions) = meta.instructions.as_deref() {
            sink.open("div", &[("id", "instructions")])?;
            for line in instructions.lines() {
                sink.text_element("p", &[], line)?;
            }
            sink.close("div")?;
        }
        Ok(())
    }
}

impl DocumentLayout for DefaultLayout {
    fn assemble(&self, meta: &QuizMeta, questions: &str) -> Result<String, RenderError> {
        let mut sink = MarkupSink::new();
        sink.open("html", &[])?;
        sink.open("head", &[])?;
        sink.text_element("title", &[], &meta.title)?;
        if let Some(css) = self.css.as_deref() {
            sink.empty(
                "link",
                &[("rel", "stylesheet"), ("type", "text/css"), ("href", css)],
            )?;
        }
        sink.close("head")?;
        sink.open("body", &[])?;
        self.quiz_header(&mut sink, meta)?;
        sink.raw(questions)?;
        sink.close("body")?;
        sink.close("html")?;
        sink.into_markup()
    }
}

/// External template document assembly.
///
/// The template references metadata as `{{ quiz.title }}`,
/// `{{ quiz.num_questions }}` and `{{ quiz.points }}`, and must carry one
/// `{{ questions }}` expansion point where the question-list markup is
/// inserted verbatim.
pub struct TemplateLayout {
    source: String,
}

impl TemplateLayout {
    /// Create a layout from in-memory template source text.
    #[must_use]
    pub fn new(source: String) -> Self {
        Self { source }
    }
}

impl DocumentLayout for TemplateLayout {
    fn assemble(&self, meta: &QuizMeta, questions: &str) -> Result<String, RenderError> {
        let mut tera = Tera::default();
        // Name without a markup suffix: the expansion point inserts trusted
        // markup, which autoescaping would mangle.
        tera.add_raw_template("quiz", &self.source)
            .map_err(TemplateError::Eval)?;
        let mut context = Context::new();
        context.insert("quiz", meta);
        context.insert("questions", questions);
        let document = tera
            .render("quiz", &context)
            .map_err(TemplateError::Eval)?;
        if !document.contains(questions) {
            return Err(TemplateError::MissingExpansionPoint.into());
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn meta() -> QuizMeta {
        QuizMeta {
            title: "Midterm".to_owned(),
            num_questions: 4,
            points: 10.5,
            instructions: None,
        }
    }

    const QUESTIONS: &str = "<ol class=\"questions\"><li>stub</li></ol>";

    #[test]
    fn test_default_layout_shell() {
        let document = DefaultLayout::new(None).assemble(&meta(), QUESTIONS).unwrap();
        assert!(document.contains("<html>"));
        assert!(document.contains("<title>Midterm</title>"));
        assert!(document.contains(QUESTIONS));
        assert!(document.contains("</html>"));
        assert!(!document.contains("<link"));
    }

    #[test]
    fn test_default_layout_stylesheet_link() {
        let document = DefaultLayout::new(Some("quiz.css".to_owned()))
            .assemble(&meta(), QUESTIONS)
            .unwrap();
        assert!(
            document.contains(r#"<link rel="stylesheet" type="text/css" href="quiz.css"/>"#)
        );
    }

    #[test]
    fn test_default_layout_student_header() {
        let document = DefaultLayout::new(None).assemble(&meta(), QUESTIONS).unwrap();
        assert!(document.contains(r#"<div id="student-name">"#));
        assert!(document.contains("<p>Name:</p>"));
        assert!(document.contains("<p>Student ID:</p>"));
        assert!(!document.contains("instructions"));
    }

    #[test]
    fn test_default_layout_instructions() {
        let mut quiz_meta = meta();
        quiz_meta.instructions = Some("No talking.\nClosed book.".to_owned());
        let document = DefaultLayout::new(None).assemble(&quiz_meta, QUESTIONS).unwrap();
        assert!(document.contains(r#"<div id="instructions">"#));
        assert!(document.contains("<p>No talking.</p>"));
        assert!(document.contains("<p>Closed book.</p>"));
    }

    #[test]
    fn test_template_layout_binds_metadata_and_questions() {
        let source = "<main>\n\
                      <h1>{{ quiz.title }} ({{ quiz.num_questions }} questions, {{ quiz.points }} points)</h1>\n\
                      {{ questions }}\n\
                      </main>";
        let document = TemplateLayout::new(source.to_owned())
            .assemble(&meta(), QUESTIONS)
            .unwrap();
        assert!(document.contains("<h1>Midterm (4 questions, 10.5 points)</h1>"));
        assert!(document.contains(QUESTIONS));
    }

    #[test]
    fn test_template_expands_questions_exactly_once() {
        let document = TemplateLayout::new("<body>{{ questions }}</body>".to_owned())
            .assemble(&meta(), QUESTIONS)
            .unwrap();
        assert_eq!(document.matches(QUESTIONS).count(), 1);
    }

    #[test]
    fn test_template_without_expansion_point_fails() {
        let err = TemplateLayout::new("<body>{{ quiz.title }}</body>".to_owned())
            .assemble(&meta(), QUESTIONS)
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Template(TemplateError::MissingExpansionPoint)
        ));
    }

    #[test]
    fn test_template_undefined_field_fails() {
        let err = TemplateLayout::new("{{ quiz.grade }}{{ questions }}".to_owned())
            .assemble(&meta(), QUESTIONS)
            .unwrap_err();
        assert!(matches!(err, RenderError::Template(TemplateError::Eval(_))));
    }

    #[test]
    fn test_template_parse_error_fails() {
        let err = TemplateLayout::new("{% if %}{{ questions }}".to_owned())
            .assemble(&meta(), QUESTIONS)
            .unwrap_err();
        assert!(matches!(err, RenderError::Template(TemplateError::Eval(_))));
    }
}
