//! Quiz data model and ingestion.
//!
//! Defines the [`Quiz`] / [`Question`] / [`Answer`] types consumed by the
//! rendering engine, plus decoding from YAML and JSON sources.
//!
//! # Variant set
//!
//! Questions are polymorphic over [`QuestionKind`]:
//! - `MultipleChoice` - one correct choice, optionally shuffled
//! - `SelectMultiple` - "select all that apply", optionally shuffled
//! - `TrueFalse` - fixed true-first presentation order
//! - `FillIn` - blanks in the question text, literal or pattern answers
//!
//! The variant set is closed: an unrecognized `type` tag is rejected while
//! decoding ([`ModelError::UnknownQuestionType`]), so code past the ingestion
//! boundary can match exhaustively.
//!
//! The model is immutable input to rendering - renderers derive display
//! strings from it and never write back.

mod answer;
mod error;
mod loader;
mod question;
mod quiz;

pub use answer::{AcceptedForm, Answer, AnswerText};
pub use error::{LoadError, ModelError};
pub use loader::{Format, load_quizzes_str};
pub use question::{Question, QuestionKind};
pub use quiz::{Quiz, QuizOptions};
