//! Deck construction.

use crate::types::Card;
use rand::{rng, seq::SliceRandom};
use std::collections::HashMap;

/// Build a shuffled deck from a topic's word-pair mapping.
///
/// Each `prompt -> answer` entry becomes one [`Card`]. An empty mapping
/// yields an empty deck; callers must treat that as "nothing to
/// practice" and not start a round.
pub fn build_deck(topic: &HashMap<String, String>) -> Vec<Card> {
    let deck = topic
        .iter()
        .map(|(prompt, answer)| Card::new(prompt.clone(), answer.clone()))
        .collect();
    shuffle_cards(deck)
}

/// Uniformly shuffle a set of cards into a fresh deck.
///
/// Used both at topic start and when rebuilding a deck from a prior
/// round's wrong cards.
pub fn shuffle_cards(mut cards: Vec<Card>) -> Vec<Card> {
    let mut rng = rng();
    cards.shuffle(&mut rng);
    cards
}
