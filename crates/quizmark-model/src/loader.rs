//! Quiz ingestion from YAML and JSON sources.

use serde::Deserialize;

use crate::error::LoadError;
use crate::quiz::Quiz;

/// Input format of a quiz source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// YAML; a source may hold multiple documents, one quiz each.
    Yaml,
    /// JSON; a source holds one quiz or an array of quizzes.
    Json,
}

/// Decode every quiz in a source.
///
/// Each quiz is later rendered to its own standalone document, so a
/// multi-quiz source yields one entry per quiz here.
///
/// # Errors
///
/// Fails on malformed input or on any data-contract violation (unknown
/// question type, empty answer list, bad pattern); no partially-decoded
/// quiz list is returned.
pub fn load_quizzes_str(text: &str, format: Format) -> Result<Vec<Quiz>, LoadError> {
    let quizzes = match format {
        Format::Yaml => {
            let mut quizzes = Vec::new();
            for document in serde_yaml::Deserializer::from_str(text) {
                quizzes.push(Quiz::deserialize(document)?);
            }
            quizzes
        }
        Format::Json => match serde_json::from_str::<OneOrMany>(text)? {
            OneOrMany::One(quiz) => vec![*quiz],
            OneOrMany::Many(quizzes) => quizzes,
        },
    };
    tracing::debug!(count = quizzes.len(), "Decoded quiz source");
    Ok(quizzes)
}

/// JSON sources accept a single quiz object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<Quiz>),
    Many(Vec<Quiz>),
}
