//! Core types for the quiz engine.

use serde::{Deserialize, Serialize};

/// One prompt/answer flashcard. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub prompt: String,
    pub answer: String,
}

impl Card {
    /// Create a card, trimming both sides.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into().trim().to_string(),
            answer: answer.into().trim().to_string(),
        }
    }
}

/// Scored outcome of one quiz round.
///
/// `total` counts the (card, answer) pairs actually evaluated. When a
/// round is abandoned early, unanswered trailing cards count toward
/// neither `correct` nor `wrong_cards`, so `total == correct +
/// wrong_cards.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub total: usize,
    pub correct: usize,
    /// Mismatched cards in original deck order, kept for the review pass.
    pub wrong_cards: Vec<Card>,
}

impl RoundResult {
    /// Whether every evaluated card was answered correctly.
    ///
    /// A zero-pair round is not a perfect one; it means the round was
    /// abandoned before any card was answered.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// Percentage of correct answers, 0.0 to 100.0.
    ///
    /// Only meaningful for rounds with at least one evaluated pair;
    /// returns 0.0 for a zero-pair round rather than dividing by zero.
    pub fn percent_correct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}
