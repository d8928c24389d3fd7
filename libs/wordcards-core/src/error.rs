//! Error types for wordcards-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur in the quiz engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The selected topic has no word pairs, so there is nothing to
    /// practice. Rounds must never start on an empty deck.
    #[error("topic has no cards to practice")]
    EmptyTopic,
}
