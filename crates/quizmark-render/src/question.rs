//! Question-item rendering.

use std::sync::LazyLock;

use quizmark_model::{Question, QuestionKind};
use rand::rngs::StdRng;
use regex::Regex;

use crate::answers::AnswerRenderer;
use crate::error::RenderError;
use crate::sink::MarkupSink;

/// Placeholder substituted for each hyphen run in fill-in question text.
const BLANK: &str = "_____________________________";

/// One-or-more hyphens marking a fill-in blank.
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid pattern"));

/// Renders one question at a known ordinal position.
pub(crate) struct QuestionRenderer<'a> {
    sink: &'a mut MarkupSink,
    solutions: bool,
    show_tags: bool,
}

impl<'a> QuestionRenderer<'a> {
    pub(crate) fn new(sink: &'a mut MarkupSink, solutions: bool, show_tags: bool) -> Self {
        Self {
            sink,
            solutions,
            show_tags,
        }
    }

    /// Render `question` as the list item at `ordinal` (0-based).
    pub(crate) fn render(
        &mut self,
        question: &Question,
        ordinal: usize,
        rng: &mut StdRng,
    ) -> Result<(), RenderError> {
        let id = format!("question-{ordinal}");
        let class = item_class(question);
        self.sink.open("li", &[("id", &id), ("class", &class)])?;
        self.render_text_block(question)?;
        if self.show_tags && !question.tags.is_empty() {
            self.sink
                .text_element("div", &[("class", "tags")], &question.tags.join(","))?;
        }
        AnswerRenderer::new(self.sink, self.solutions).render(question, rng)?;
        self.sink.close("li")
    }

    /// The text block: point annotation, multi-select hint, question text.
    ///
    /// Untrusted text is split into lines, each line its own escaped
    /// paragraph; trusted (raw) text is one verbatim block.
    fn render_text_block(&mut self, question: &Question) -> Result<(), RenderError> {
        self.sink.open("div", &[("class", "text")])?;
        let text = heading(question);
        if question.raw {
            self.sink.raw_element("p", &[], &text)?;
        } else {
            for line in text.lines() {
                self.sink.text_element("p", &[], line)?;
            }
        }
        self.sink.close("div")
    }
}

/// Class list for the question item: `question`, the variant tag, and
/// `multiple` for select-all questions.
fn item_class(question: &Question) -> String {
    let mut class = format!("question {}", question.kind.class_label());
    if question.multiple() {
        class.push_str(" multiple");
    }
    class
}

/// Leading display text: `[N point(s)] `, the select-all hint, then the
/// question text with fill-in hyphen runs replaced by blanks.
fn heading(question: &Question) -> String {
    let unit = if (question.points - 1.0).abs() < f64::EPSILON {
        "point"
    } else {
        "points"
    };
    let hint = if question.multiple() {
        "Select ALL that apply: "
    } else {
        ""
    };
    let text = match question.kind {
        QuestionKind::FillIn { .. } => HYPHEN_RUN.replace_all(&question.text, BLANK),
        _ => std::borrow::Cow::Borrowed(question.text.as_str()),
    };
    format!("[{} {unit}] {hint}{text}", question.points)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quizmark_model::Quiz;
    use rand::SeedableRng;

    use super::*;

    fn decode(yaml: &str) -> Question {
        let quiz: Quiz =
            serde_yaml::from_str(&format!("title: T\nseed: 0\nquestions:\n{yaml}")).unwrap();
        quiz.questions.into_iter().next().unwrap()
    }

    fn render(question: &Question, ordinal: usize, solutions: bool, show_tags: bool) -> String {
        let mut sink = MarkupSink::new();
        let mut rng = StdRng::seed_from_u64(0);
        QuestionRenderer::new(&mut sink, solutions, show_tags)
            .render(question, ordinal, &mut rng)
            .unwrap();
        sink.into_markup().unwrap()
    }

    const TRUE_FALSE: &str = "\
- type: true_false
  text: Sky is blue
  answers:
  - text: \"True\"
    correct: true
  - text: \"False\"
";

    #[test]
    fn test_item_id_and_class() {
        let question = decode(TRUE_FALSE);
        let markup = render(&question, 3, false, false);
        assert!(markup.contains(r#"<li id="question-3" class="question truefalse">"#));
    }

    #[test]
    fn test_multiple_class_and_hint() {
        let question = decode(
            "- type: select_multiple\n  text: Pick all\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains(r#"class="question selectmultiple multiple""#));
        assert!(markup.contains("Select ALL that apply: Pick all"));
    }

    #[test]
    fn test_singular_point_annotation() {
        let question = decode(TRUE_FALSE);
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("[1 point] Sky is blue"));
    }

    #[test]
    fn test_plural_point_annotation() {
        let question = decode(
            "- type: multiple_choice\n  text: Pick\n  points: 2\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("[2 points] Pick"));
    }

    #[test]
    fn test_fill_in_hyphen_runs_become_blanks() {
        let question = decode(
            "- type: fill_in\n  text: \"The capital of France is ----.\"\n  answers:\n  - text: Paris\n",
        );
        for solutions in [false, true] {
            let markup = render(&question, 0, solutions, false);
            assert!(markup.contains(&format!("The capital of France is {BLANK}.")));
            assert!(!markup.contains("----"));
        }
    }

    #[test]
    fn test_hyphens_kept_for_other_variants() {
        let question = decode(
            "- type: multiple_choice\n  text: \"a -- b\"\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("a -- b"));
    }

    #[test]
    fn test_multiline_text_splits_into_paragraphs() {
        let question = decode(
            "- type: multiple_choice\n  text: \"line one\\nline two\"\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("<p>[1 point] line one</p>"));
        assert!(markup.contains("<p>line two</p>"));
    }

    #[test]
    fn test_raw_text_one_verbatim_block() {
        let question = decode(
            "- type: multiple_choice\n  text: \"see <em>this</em>\"\n  raw: true\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("<p>[1 point] see <em>this</em></p>"));
    }

    #[test]
    fn test_unraw_text_is_escaped() {
        let question = decode(
            "- type: multiple_choice\n  text: \"see <em>this</em>\"\n  answers:\n  - text: A\n    correct: true\n",
        );
        let markup = render(&question, 0, false, false);
        assert!(markup.contains("see &lt;em&gt;this&lt;/em&gt;"));
        assert!(!markup.contains("<em>"));
    }

    #[test]
    fn test_tags_block_only_when_enabled() {
        let yaml = "- type: true_false\n  text: T\n  tags: [easy, weather]\n  answers:\n  - text: \"True\"\n    correct: true\n";
        let question = decode(yaml);
        let without = render(&question, 0, false, false);
        assert!(!without.contains("tags"));
        let with = render(&question, 0, false, true);
        assert!(with.contains(r#"<div class="tags">easy,weather</div>"#));
    }

    #[test]
    fn test_heading_blank_length() {
        assert_eq!(BLANK.len(), 29);
    }
}
