//! Interactive practice over a topic.
//!
//! Generic over the input/output streams so the whole protocol can be
//! exercised in tests with in-memory buffers. One answer is collected
//! per card in deck order; an empty line skips the card and end of
//! input abandons the rest of the round.

use crate::history::History;
use anyhow::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use wordcards_core::{is_correct, QuizError, ReviewCycle, RoundResult};

/// Read one line, `None` on end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Run the full practice cycle for one topic: rounds, per-card
/// feedback, score display, and the retry-on-wrong-answers loop.
///
/// Returns the final round's result, or `None` when there was nothing
/// to practice or the first round was abandoned before any answer.
pub fn practice_topic<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    topic_name: &str,
    words: &HashMap<String, String>,
    history: &mut History,
) -> Result<Option<RoundResult>> {
    let mut cycle = match ReviewCycle::new(words) {
        Ok(cycle) => cycle,
        Err(QuizError::EmptyTopic) => {
            writeln!(out, "Nothing to practice in \"{topic_name}\".")?;
            return Ok(None);
        }
    };

    writeln!(out, "\nPracticing \"{topic_name}\". Press Enter to skip a card.")?;

    loop {
        let deck = cycle.deck().to_vec();
        let mut answers = Vec::new();

        for (position, card) in deck.iter().enumerate() {
            write!(out, "[{}/{}] {}: ", position + 1, deck.len(), card.prompt)?;
            out.flush()?;

            let Some(answer) = read_line(input)? else {
                writeln!(out)?;
                break;
            };
            if is_correct(&answer, card) {
                writeln!(out, "Correct!")?;
            } else {
                writeln!(out, "Wrong. The answer is: {}", card.answer)?;
            }
            answers.push(answer);
        }

        let result = cycle.complete_round(&answers);
        if result.total == 0 {
            writeln!(out, "Round abandoned.")?;
            return Ok(None);
        }

        history.record(topic_name, &result);
        if let Err(err) = history.save() {
            tracing::warn!(%err, "failed to save results");
        }

        if result.is_perfect() {
            writeln!(out, "\nCongratulations! 100% correct answers!")?;
            return Ok(Some(result));
        }

        writeln!(
            out,
            "\nYou got {:.0}% correct ({}/{}).",
            result.percent_correct(),
            result.correct,
            result.total
        )?;

        write!(
            out,
            "Review the {} missed card(s)? [y/N]: ",
            result.wrong_cards.len()
        )?;
        out.flush()?;
        let consent = match read_line(input)? {
            Some(answer) => affirmative(&answer),
            None => false,
        };
        if !consent {
            writeln!(out, "Returning to the topic menu.")?;
            return Ok(Some(result));
        }
        cycle.retry_wrong();
    }
}
