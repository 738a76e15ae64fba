//! Quiz container and derived totals.

use serde::Deserialize;

use crate::question::Question;

/// A quiz: an ordered collection of typed questions plus presentation
/// options.
///
/// Immutable input to rendering; the renderer reads it for the duration of
/// one render call and never writes back.
#[derive(Clone, Debug, Deserialize)]
pub struct Quiz {
    /// Quiz title.
    pub title: String,
    /// Seed pinning answer-shuffle order for reproducible rendering.
    #[serde(default)]
    pub seed: u64,
    /// Presentation options.
    #[serde(default)]
    pub options: QuizOptions,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

/// Quiz-level presentation options.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuizOptions {
    /// Free-text instructions shown ahead of the questions.
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Quiz {
    /// Total number of questions.
    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Total point value across all questions.
    #[must_use]
    pub fn points(&self) -> f64 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const QUIZ: &str = "\
title: Quiz 1
seed: 42
options:
  instructions: |
    No talking.
    Closed book.
questions:
- type: true_false
  text: Sky is blue
  answers:
  - text: \"True\"
    correct: true
  - text: \"False\"
- type: multiple_choice
  text: Pick one
  points: 3
  answers:
  - text: A
    correct: true
  - text: B
";

    #[test]
    fn test_decode_quiz() {
        let quiz: Quiz = serde_yaml::from_str(QUIZ).unwrap();
        assert_eq!(quiz.title, "Quiz 1");
        assert_eq!(quiz.seed, 42);
        assert_eq!(quiz.num_questions(), 2);
    }

    #[test]
    fn test_total_points() {
        let quiz: Quiz = serde_yaml::from_str(QUIZ).unwrap();
        assert!((quiz.points() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_instructions() {
        let quiz: Quiz = serde_yaml::from_str(QUIZ).unwrap();
        let instructions = quiz.options.instructions.as_deref().unwrap();
        assert_eq!(instructions.lines().count(), 2);
    }

    #[test]
    fn test_seed_defaults_to_zero() {
        let quiz: Quiz = serde_yaml::from_str(
            "title: Q\nquestions:\n- type: true_false\n  text: T\n  answers:\n  - text: \"True\"\n    correct: true\n",
        )
        .unwrap();
        assert_eq!(quiz.seed, 0);
        assert!(quiz.options.instructions.is_none());
    }
}
