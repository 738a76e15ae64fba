//! Answers and acceptable fill-in forms.

use serde::Deserialize;

use crate::error::ModelError;

/// One answer belonging to a question.
#[derive(Clone, Debug)]
pub struct Answer {
    /// Display text, or the acceptable forms for a fill-in answer.
    pub text: AnswerText,
    /// Whether this answer is correct.
    pub correct: bool,
    /// Explanation shown in solution mode.
    pub explanation: Option<String>,
}

/// Answer text: a single display string, or a list of acceptable forms.
///
/// The list shape is only meaningful for fill-in questions; choice-family
/// renderers reject it at render time through [`single_text`](Self::single_text).
#[derive(Clone, Debug)]
pub enum AnswerText {
    /// A single display string.
    Single(String),
    /// Acceptable fill-in forms.
    Any(Vec<AcceptedForm>),
}

impl AnswerText {
    /// The display string when the text is a single scalar.
    #[must_use]
    pub fn single_text(&self) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Any(_) => None,
        }
    }
}

/// One acceptable fill-in form.
#[derive(Clone, Debug)]
pub enum AcceptedForm {
    /// Exact string match.
    Literal(String),
    /// Pattern matcher; rendered in solution mode as `/source/`.
    Pattern(regex::Regex),
}

/// Wire shape of an answer, before pattern compilation.
///
/// Pattern compilation happens in the [`TryFrom`] conversion so that a bad
/// pattern surfaces as [`ModelError::InvalidPattern`] instead of vanishing
/// into an untagged-enum mismatch.
#[derive(Deserialize)]
pub(crate) struct RawAnswer {
    text: RawAnswerText,
    #[serde(default)]
    correct: bool,
    #[serde(default)]
    explanation: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswerText {
    Single(String),
    Any(Vec<RawAcceptedForm>),
}

/// Wire shape of an acceptable form: a bare string, or `{pattern: "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAcceptedForm {
    Literal(String),
    Pattern { pattern: String },
}

impl TryFrom<RawAnswer> for Answer {
    type Error = ModelError;

    fn try_from(raw: RawAnswer) -> Result<Self, Self::Error> {
        let text = match raw.text {
            RawAnswerText::Single(text) => AnswerText::Single(text),
            RawAnswerText::Any(forms) => AnswerText::Any(
                forms
                    .into_iter()
                    .map(AcceptedForm::try_from)
                    .collect::<Result<_, _>>()?,
            ),
        };
        Ok(Self {
            text,
            correct: raw.correct,
            explanation: raw.explanation,
        })
    }
}

impl TryFrom<RawAcceptedForm> for AcceptedForm {
    type Error = ModelError;

    fn try_from(raw: RawAcceptedForm) -> Result<Self, Self::Error> {
        match raw {
            RawAcceptedForm::Literal(text) => Ok(Self::Literal(text)),
            RawAcceptedForm::Pattern { pattern } => regex::Regex::new(&pattern)
                .map(Self::Pattern)
                .map_err(|source| ModelError::InvalidPattern { pattern, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode(yaml: &str) -> Result<Answer, ModelError> {
        let raw: RawAnswer = serde_yaml::from_str(yaml).unwrap();
        Answer::try_from(raw)
    }

    #[test]
    fn test_answer_single_text() {
        let answer = decode("text: Paris\ncorrect: true").unwrap();
        assert_eq!(answer.text.single_text(), Some("Paris"));
        assert!(answer.correct);
        assert_eq!(answer.explanation, None);
    }

    #[test]
    fn test_answer_defaults_to_incorrect() {
        let answer = decode("text: Lyon").unwrap();
        assert!(!answer.correct);
    }

    #[test]
    fn test_answer_with_explanation() {
        let answer = decode("text: Paris\ncorrect: true\nexplanation: Capital since 987.").unwrap();
        assert_eq!(answer.explanation.as_deref(), Some("Capital since 987."));
    }

    #[test]
    fn test_accepted_forms_literal_and_pattern() {
        let answer = decode("text:\n  - \"4\"\n  - pattern: \"fou?r\"\ncorrect: true").unwrap();
        let AnswerText::Any(forms) = &answer.text else {
            panic!("expected acceptable-form list");
        };
        assert_eq!(forms.len(), 2);
        assert!(matches!(&forms[0], AcceptedForm::Literal(text) if text == "4"));
        assert!(matches!(&forms[1], AcceptedForm::Pattern(re) if re.as_str() == "fou?r"));
    }

    #[test]
    fn test_form_list_has_no_single_text() {
        let answer = decode("text: [\"4\", \"four\"]").unwrap();
        assert_eq!(answer.text.single_text(), None);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = decode("text:\n  - pattern: \"f(ou\"\ncorrect: true").unwrap_err();
        assert!(matches!(err, ModelError::InvalidPattern { ref pattern, .. } if pattern == "f(ou"));
    }
}
