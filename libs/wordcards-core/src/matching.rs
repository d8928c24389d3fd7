//! Answer normalization and grading for typed answers.

use crate::types::Card;

/// Canonicalize a free-text answer for comparison.
///
/// Trims, collapses every internal whitespace run to a single space,
/// and lowercases. Total over any input, including the empty string,
/// and idempotent.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compare a typed answer to a card's expected answer.
///
/// Case- and whitespace-insensitive, otherwise exact: no fuzzy or
/// typo tolerance, no partial credit.
pub fn is_correct(user_answer: &str, card: &Card) -> bool {
    normalize(user_answer) == normalize(&card.answer)
}
