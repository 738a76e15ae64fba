//! Question variants and ingestion-boundary decoding.

use serde::Deserialize;

use crate::answer::{Answer, RawAnswer};
use crate::error::ModelError;

/// One quiz question.
///
/// Decoded through a wire representation so that an unrecognized variant tag
/// is rejected while decoding; past the ingestion boundary the variant set
/// is closed and renderers match on [`QuestionKind`] exhaustively.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// Question text; may span multiple lines and contain markup.
    pub text: String,
    /// Point value.
    pub points: f64,
    /// Tags, in declaration order.
    pub tags: Vec<String>,
    /// Whether text fields already contain trusted markup.
    pub raw: bool,
    /// Variant-specific behavior.
    pub kind: QuestionKind,
    /// Answers, in declaration order.
    pub answers: Vec<Answer>,
}

/// Question variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// One correct choice.
    MultipleChoice {
        /// Shuffle answer presentation order.
        randomize: bool,
    },
    /// "Select all that apply".
    SelectMultiple {
        /// Shuffle answer presentation order.
        randomize: bool,
    },
    /// True/false pair with fixed presentation order.
    TrueFalse,
    /// Blank in the question text; answers are acceptable forms.
    FillIn {
        /// Whether acceptable forms match case-sensitively.
        case_sensitive: bool,
    },
}

impl QuestionKind {
    /// Lowercased variant tag, used as a CSS class on the question item.
    #[must_use]
    pub fn class_label(self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "multiplechoice",
            Self::SelectMultiple { .. } => "selectmultiple",
            Self::TrueFalse => "truefalse",
            Self::FillIn { .. } => "fillin",
        }
    }
}

impl Question {
    /// Whether the question asks to select all applicable answers.
    #[must_use]
    pub fn multiple(&self) -> bool {
        matches!(self.kind, QuestionKind::SelectMultiple { .. })
    }

    /// Whether answer presentation order is shuffled.
    #[must_use]
    pub fn randomize(&self) -> bool {
        matches!(
            self.kind,
            QuestionKind::MultipleChoice { randomize: true }
                | QuestionKind::SelectMultiple { randomize: true }
        )
    }
}

/// Wire representation of a question before variant resolution.
#[derive(Deserialize)]
struct RawQuestion {
    #[serde(rename = "type")]
    kind: String,
    text: String,
    #[serde(default = "default_points")]
    points: f64,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    raw: bool,
    #[serde(default)]
    randomize: bool,
    #[serde(default)]
    case_sensitive: bool,
    #[serde(default)]
    answers: Vec<RawAnswer>,
}

fn default_points() -> f64 {
    1.0
}

impl TryFrom<RawQuestion> for Question {
    type Error = ModelError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_str() {
            "multiple_choice" => QuestionKind::MultipleChoice {
                randomize: raw.randomize,
            },
            "select_multiple" => QuestionKind::SelectMultiple {
                randomize: raw.randomize,
            },
            "true_false" => QuestionKind::TrueFalse,
            "fill_in" => QuestionKind::FillIn {
                case_sensitive: raw.case_sensitive,
            },
            other => return Err(ModelError::UnknownQuestionType(other.to_owned())),
        };
        if raw.answers.is_empty() {
            return Err(ModelError::NoAnswers(raw.text));
        }
        if raw.points <= 0.0 {
            return Err(ModelError::NonPositivePoints(raw.text));
        }
        let answers = raw
            .answers
            .into_iter()
            .map(Answer::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            text: raw.text,
            points: raw.points,
            tags: raw.tags,
            raw: raw.raw,
            kind,
            answers,
        })
    }
}
