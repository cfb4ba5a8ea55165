//! Error types for loading and running a quiz.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while retrieving question data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid question JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to fetch questions: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("cannot submit: {answered} of {total} questions answered")]
    NotSubmittable { answered: usize, total: usize },

    #[error("failed to write questions as JSON: {0}")]
    Output(#[from] serde_json::Error),
}
