//! Core quiz engine shared by the wordcards applications.
//!
//! Provides:
//! - Deck construction (shuffled prompt/answer cards from a topic mapping)
//! - Answer normalization and grading for typed answers
//! - Round scoring (total / correct / wrong cards)
//! - The wrong-answer review cycle
//!
//! The engine is synchronous and does no I/O; collecting answers and
//! asking for retry consent belong to the presentation layer.

pub mod deck;
pub mod error;
pub mod matching;
pub mod review;
pub mod round;
pub mod types;

pub use deck::{build_deck, shuffle_cards};
pub use error::{QuizError, Result};
pub use matching::{is_correct, normalize};
pub use review::ReviewCycle;
pub use round::run_round;
pub use types::{Card, RoundResult};
