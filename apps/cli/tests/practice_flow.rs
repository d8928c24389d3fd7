//! End-to-end tests for the interactive practice protocol, driven
//! through in-memory streams.

use std::collections::HashMap;
use std::io::Cursor;

use wordcards_cli::history::History;
use wordcards_cli::session::practice_topic;

fn one_card_topic() -> HashMap<String, String> {
    HashMap::from([("cat".to_string(), "кіт".to_string())])
}

/// Every card shares the same answer so scripted input works no matter
/// how the deck was shuffled.
fn same_answer_topic() -> HashMap<String, String> {
    HashMap::from([
        ("yes".to_string(), "так".to_string()),
        ("yeah".to_string(), "так".to_string()),
    ])
}

struct Run {
    output: String,
    result: Option<wordcards_core::RoundResult>,
    history_path: std::path::PathBuf,
    _dir: tempfile::TempDir,
}

fn run_practice(topic: &HashMap<String, String>, script: &str) -> Run {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("results.json");
    let mut history = History::load(&history_path);

    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let result = practice_topic(&mut input, &mut output, "Animals", topic, &mut history).unwrap();

    Run {
        output: String::from_utf8(output).unwrap(),
        result,
        history_path,
        _dir: dir,
    }
}

#[test]
fn perfect_round_congratulates_and_saves() {
    let run = run_practice(&one_card_topic(), "кіт\n");

    assert!(run.output.contains("Correct!"));
    assert!(run.output.contains("Congratulations! 100% correct answers!"));

    let result = run.result.unwrap();
    assert!(result.is_perfect());

    let saved = History::load(&run.history_path);
    assert_eq!(saved.get("Animals").unwrap().summary, "1/1 correct");
}

#[test]
fn wrong_answer_then_accepted_retry_reaches_perfect() {
    let run = run_practice(&one_card_topic(), "кит\ny\nкіт\n");

    assert!(run.output.contains("Wrong. The answer is: кіт"));
    assert!(run.output.contains("You got 0% correct (0/1)."));
    assert!(run.output.contains("Congratulations! 100% correct answers!"));

    let result = run.result.unwrap();
    assert!(result.is_perfect());

    // The retry round's outcome is what ends up saved.
    let saved = History::load(&run.history_path);
    assert_eq!(saved.get("Animals").unwrap().summary, "1/1 correct");
}

#[test]
fn declined_retry_ends_the_cycle() {
    let run = run_practice(&one_card_topic(), "кит\nn\n");

    assert!(run.output.contains("Review the 1 missed card(s)?"));
    assert!(run.output.contains("Returning to the topic menu."));

    let result = run.result.unwrap();
    assert_eq!(result.correct, 0);
    assert_eq!(result.wrong_cards.len(), 1);

    let saved = History::load(&run.history_path);
    assert_eq!(saved.get("Animals").unwrap().summary, "0/1 correct");
}

#[test]
fn empty_line_skips_and_counts_as_wrong() {
    let run = run_practice(&one_card_topic(), "\nn\n");

    assert!(run.output.contains("Wrong. The answer is: кіт"));
    let result = run.result.unwrap();
    assert_eq!(result.correct, 0);
    assert_eq!(result.total, 1);
}

#[test]
fn immediate_abandon_scores_nothing_and_saves_nothing() {
    let run = run_practice(&one_card_topic(), "");

    assert!(run.output.contains("Round abandoned."));
    assert!(run.result.is_none());
    assert!(!run.history_path.exists());
}

#[test]
fn abandon_after_one_wrong_answer_only_scores_that_pair() {
    // Two cards, one wrong answer, then end of input and no consent.
    let run = run_practice(&same_answer_topic(), "хибно\n");

    let result = run.result.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.correct, 0);
    assert_eq!(result.wrong_cards.len(), 1);
}

#[test]
fn multi_card_perfect_round() {
    let run = run_practice(&same_answer_topic(), "так\nтак\n");

    let result = run.result.unwrap();
    assert!(result.is_perfect());
    assert_eq!(result.total, 2);
}

#[test]
fn empty_topic_reports_nothing_to_practice() {
    let run = run_practice(&HashMap::new(), "");

    assert!(run.output.contains("Nothing to practice"));
    assert!(run.result.is_none());
}
