//! Rendering error types.

use std::string::FromUtf8Error;

/// Error produced while rendering a quiz document.
///
/// All variants are programmer or data errors over already-validated input;
/// none are transient, so callers should propagate rather than retry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Markup write error.
    #[error("markup write error")]
    Write(#[from] std::io::Error),

    /// Sink buffer held invalid UTF-8.
    #[error("markup buffer is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    /// Choice-family answer whose text is an acceptable-form list.
    #[error("question `{question}` has a non-scalar answer text")]
    MalformedAnswer {
        /// Text of the offending question.
        question: String,
    },

    /// Document template failed to evaluate.
    #[error("template error")]
    Template(#[from] TemplateError),
}

/// Error evaluating an external document template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template source failed to parse or evaluate.
    #[error("template evaluation failed")]
    Eval(#[from] tera::Error),

    /// Template output does not include the question-list markup.
    #[error("template has no expansion point for the question list")]
    MissingExpansionPoint,
}
