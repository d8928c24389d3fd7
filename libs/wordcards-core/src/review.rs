//! The wrong-answer review cycle.
//!
//! Holds the state that outlives a single round: the deck currently in
//! play and the results accumulated so far. The cycle is an explicit
//! loop rather than recursion, so arbitrarily many retry rounds never
//! grow the call stack.

use crate::deck::{build_deck, shuffle_cards};
use crate::error::{QuizError, Result};
use crate::round::run_round;
use crate::types::{Card, RoundResult};
use std::collections::HashMap;

/// State of one practice session over a topic: the current deck plus
/// every scored round so far.
#[derive(Debug)]
pub struct ReviewCycle {
    deck: Vec<Card>,
    rounds: Vec<RoundResult>,
}

impl ReviewCycle {
    /// Start a cycle over a topic mapping.
    ///
    /// Fails with [`QuizError::EmptyTopic`] when the mapping has no
    /// word pairs; a round must never start on an empty deck.
    pub fn new(topic: &HashMap<String, String>) -> Result<Self> {
        let deck = build_deck(topic);
        if deck.is_empty() {
            return Err(QuizError::EmptyTopic);
        }
        Ok(Self {
            deck,
            rounds: Vec::new(),
        })
    }

    /// The deck for the round currently in play.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Score the answers collected for the current deck and record the
    /// result.
    pub fn complete_round<S: AsRef<str>>(&mut self, answers: &[S]) -> RoundResult {
        let result = run_round(&self.deck, answers);
        self.rounds.push(result.clone());
        result
    }

    /// The most recently scored round, if any.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.rounds.last()
    }

    /// Every round scored so far, in order.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Rebuild the deck from the last round's wrong cards.
    ///
    /// Returns `false` when there is nothing to retry: no round has
    /// been scored yet, or the last round had no wrong cards. The new
    /// deck is never larger than the previous one, so a user who keeps
    /// answering correctly always reaches the end.
    pub fn retry_wrong(&mut self) -> bool {
        let Some(last) = self.rounds.last() else {
            return false;
        };
        if last.wrong_cards.is_empty() {
            return false;
        }
        self.deck = shuffle_cards(last.wrong_cards.clone());
        true
    }

    /// Drive the full interactive cycle.
    ///
    /// `collect_answers` gathers one answer string per card (fewer if
    /// the round is abandoned); `rerun_consent` is asked after each
    /// imperfect round. The loop ends on a perfect round, on withheld
    /// consent, or when a round leaves nothing to retry — never by an
    /// iteration limit. Returns the final round's result.
    pub fn run<F, C>(&mut self, mut collect_answers: F, mut rerun_consent: C) -> RoundResult
    where
        F: FnMut(&[Card]) -> Vec<String>,
        C: FnMut(&RoundResult) -> bool,
    {
        loop {
            let answers = collect_answers(&self.deck);
            let result = self.complete_round(&answers);

            if result.is_perfect() || result.wrong_cards.is_empty() {
                return result;
            }
            if !rerun_consent(&result) {
                return result;
            }
            if !self.retry_wrong() {
                return result;
            }
        }
    }
}
