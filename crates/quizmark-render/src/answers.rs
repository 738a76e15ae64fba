//! Answer-block rendering policy.
//!
//! Selection and ordering are per-variant: true/false pairs keep a fixed
//! true-first order, randomizing choice questions shuffle with the seeded
//! generator handed in by the quiz renderer, fill-in questions list their
//! acceptable forms only in solution mode.

use std::borrow::Cow;

use quizmark_model::{AcceptedForm, Answer, AnswerText, Question, QuestionKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::RenderError;
use crate::sink::MarkupSink;

/// Renders the answer block of one question.
pub(crate) struct AnswerRenderer<'a> {
    sink: &'a mut MarkupSink,
    solutions: bool,
}

impl<'a> AnswerRenderer<'a> {
    pub(crate) fn new(sink: &'a mut MarkupSink, solutions: bool) -> Self {
        Self { sink, solutions }
    }

    /// Render the answer block for `question`.
    ///
    /// Fill-in questions have no answer choices in blank mode; their blanks
    /// appear in the question text instead.
    pub(crate) fn render(
        &mut self,
        question: &Question,
        rng: &mut StdRng,
    ) -> Result<(), RenderError> {
        match question.kind {
            QuestionKind::FillIn { case_sensitive } => {
                if self.solutions {
                    self.render_accepted_forms(question, case_sensitive)?;
                }
                Ok(())
            }
            QuestionKind::MultipleChoice { .. }
            | QuestionKind::SelectMultiple { .. }
            | QuestionKind::TrueFalse => self.render_choices(question, rng),
        }
    }

    fn render_choices(&mut self, question: &Question, rng: &mut StdRng) -> Result<(), RenderError> {
        self.sink.open("ol", &[("class", "answers")])?;
        for answer in ordered_answers(question, rng) {
            if self.solutions {
                self.render_solution_item(question, answer)?;
            } else {
                let text = display_text(question, answer, false)?;
                if question.raw {
                    self.sink.raw_element("li", &[], &text)?;
                } else {
                    self.sink.text_element("li", &[], &text)?;
                }
            }
        }
        self.sink.close("ol")
    }

    fn render_solution_item(
        &mut self,
        question: &Question,
        answer: &Answer,
    ) -> Result<(), RenderError> {
        let class = if answer.correct { "correct" } else { "incorrect" };
        let text = display_text(question, answer, true)?;
        self.sink.open("li", &[("class", class)])?;
        self.paragraph(&[], question.raw, &text)?;
        if let Some(explanation) = answer.explanation.as_deref() {
            self.paragraph(&[("class", "explanation")], question.raw, explanation)?;
        }
        self.sink.close("li")
    }

    /// Solution block for a fill-in question: the canonical answer's
    /// explanation first, then every acceptable form as a list item.
    fn render_accepted_forms(
        &mut self,
        question: &Question,
        case_sensitive: bool,
    ) -> Result<(), RenderError> {
        let Some(canonical) = question.answers.first() else {
            return Ok(());
        };
        if let Some(explanation) = canonical.explanation.as_deref() {
            self.paragraph(&[("class", "explanation")], question.raw, explanation)?;
        }
        let forms: Vec<AcceptedForm> = match &canonical.text {
            AnswerText::Single(text) => vec![AcceptedForm::Literal(text.clone())],
            AnswerText::Any(forms) => forms.clone(),
        };
        self.sink.open("ol", &[("class", "answers")])?;
        for form in &forms {
            self.sink.open("li", &[])?;
            let shown = match form {
                AcceptedForm::Literal(text) => Cow::Borrowed(text.as_str()),
                AcceptedForm::Pattern(re) if case_sensitive => {
                    Cow::Owned(format!("/{}/", re.as_str()))
                }
                AcceptedForm::Pattern(re) => Cow::Owned(format!("/{}/i", re.as_str())),
            };
            self.paragraph(&[], question.raw, &shown)?;
            self.sink.close("li")?;
        }
        self.sink.close("ol")
    }

    fn paragraph(
        &mut self,
        attrs: &[(&str, &str)],
        raw: bool,
        text: &str,
    ) -> Result<(), RenderError> {
        if raw {
            self.sink.raw_element("p", attrs, text)
        } else {
            self.sink.text_element("p", attrs, text)
        }
    }
}

/// Answer presentation order for choice-family questions.
///
/// True/false sorts descending by display text so the true-labelled answer
/// comes first regardless of input order; randomizing variants shuffle with
/// the caller's seeded generator; everything else keeps input order.
fn ordered_answers<'q>(question: &'q Question, rng: &mut StdRng) -> Vec<&'q Answer> {
    let mut answers: Vec<&Answer> = question.answers.iter().collect();
    match question.kind {
        QuestionKind::TrueFalse => {
            answers.sort_by(|a, b| b.text.single_text().cmp(&a.text.single_text()));
        }
        QuestionKind::MultipleChoice { randomize: true }
        | QuestionKind::SelectMultiple { randomize: true } => {
            answers.shuffle(rng);
        }
        QuestionKind::MultipleChoice { randomize: false }
        | QuestionKind::SelectMultiple { randomize: false }
        | QuestionKind::FillIn { .. } => {}
    }
    answers
}

/// Display text for a choice-family answer.
///
/// In solution mode a true/false answer is prefixed with its correctness
/// label. The prefix is derived here on every call - stored answer text is
/// never touched, so repeated renders of the same model cannot stack
/// prefixes.
fn display_text<'q>(
    question: &Question,
    answer: &'q Answer,
    solutions: bool,
) -> Result<Cow<'q, str>, RenderError> {
    let text = answer
        .text
        .single_text()
        .ok_or_else(|| RenderError::MalformedAnswer {
            question: question.text.clone(),
        })?;
    if solutions && question.kind == QuestionKind::TrueFalse {
        let label = if answer.correct {
            "CORRECT: "
        } else {
            "INCORRECT: "
        };
        Ok(Cow::Owned(format!("{label}{text}")))
    } else {
        Ok(Cow::Borrowed(text))
    }
}
