//! Error types for the quiz data model.

/// Data-contract violation in quiz input.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Question `type` tag outside the supported variant set.
    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),

    /// Acceptable-answer pattern failed to compile.
    #[error("invalid answer pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern source as written in the quiz.
        pattern: String,
        /// Compilation failure detail.
        #[source]
        source: regex::Error,
    },

    /// Question declared without answers.
    #[error("question `{0}` has no answers")]
    NoAnswers(String),

    /// Question declared with a non-positive point value.
    #[error("question `{0}` has a non-positive point value")]
    NonPositivePoints(String),
}

/// Error decoding quizzes from an input source.
///
/// Data-contract violations ([`ModelError`]) surface through the decode
/// error of the format in use; the source chain carries the detail.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// YAML document failed to decode.
    #[error("YAML decode error")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON source failed to decode.
    #[error("JSON decode error")]
    Json(#[from] serde_json::Error),
}
