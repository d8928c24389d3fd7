//! Round scoring.

use crate::matching::is_correct;
use crate::types::{Card, RoundResult};

/// Score one pass over a deck against the answers collected for it.
///
/// Cards and answers are paired positionally. When the round was
/// abandoned early the answer sequence is shorter than the deck;
/// unpaired trailing cards are not evaluated and do not count toward
/// `total`. A skip is just an answer that does not match (presentation
/// layers send an empty string), so it lands in `wrong_cards`.
pub fn run_round<S: AsRef<str>>(deck: &[Card], answers: &[S]) -> RoundResult {
    let mut correct = 0;
    let mut wrong_cards = Vec::new();

    for (card, answer) in deck.iter().zip(answers) {
        if is_correct(answer.as_ref(), card) {
            correct += 1;
        } else {
            wrong_cards.push(card.clone());
        }
    }

    RoundResult {
        total: deck.len().min(answers.len()),
        correct,
        wrong_cards,
    }
}
