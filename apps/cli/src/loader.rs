//! CSV word-list loader.
//!
//! Word lists are delimited files with a header row of
//! `topic,term,translation`. The same rows serve both practice
//! directions; the direction only decides which column becomes the
//! prompt and which the answer.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Topic name to its word-pair mapping, sorted by topic for the menu.
pub type Topics = BTreeMap<String, HashMap<String, String>>;

/// Which column is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TermToTranslation,
    TranslationToTerm,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::TermToTranslation => "term → translation",
            Self::TranslationToTerm => "translation → term",
        }
    }
}

#[derive(Debug, Deserialize)]
struct WordRow {
    topic: String,
    term: String,
    translation: String,
}

/// Load and orient the word list at `path`.
pub fn load_topics(path: &Path, direction: Direction) -> Result<Topics> {
    let file = File::open(path)
        .with_context(|| format!("opening word list {}", path.display()))?;
    read_topics(file, direction)
}

/// Read topics from any CSV source.
///
/// All three fields are trimmed. Rows with an empty field contribute
/// nothing; rows that fail to parse are skipped with a warning rather
/// than aborting the load.
pub fn read_topics<R: Read>(reader: R, direction: Direction) -> Result<Topics> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut topics = Topics::new();

    for row in csv_reader.deserialize() {
        let row: WordRow = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(%err, "skipping malformed row");
                continue;
            }
        };

        let topic = row.topic.trim();
        let term = row.term.trim();
        let translation = row.translation.trim();
        if topic.is_empty() || term.is_empty() || translation.is_empty() {
            continue;
        }

        let (prompt, answer) = match direction {
            Direction::TermToTranslation => (term, translation),
            Direction::TranslationToTerm => (translation, term),
        };
        topics
            .entry(topic.to_string())
            .or_default()
            .insert(prompt.to_string(), answer.to_string());
    }

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const SAMPLE: &str = "\
topic,term,translation
Animals, cat ,кіт
Animals,dog, пес
City,street,вулиця
";

    #[test]
    fn loads_topics_with_trimmed_fields() {
        let topics = read_topics(Cursor::new(SAMPLE), Direction::TermToTranslation).unwrap();

        assert_eq!(topics.len(), 2);
        let animals = &topics["Animals"];
        assert_eq!(animals.len(), 2);
        assert_eq!(animals["cat"], "кіт");
        assert_eq!(animals["dog"], "пес");
        assert_eq!(topics["City"]["street"], "вулиця");
    }

    #[test]
    fn reverse_direction_swaps_prompt_and_answer() {
        let topics = read_topics(Cursor::new(SAMPLE), Direction::TranslationToTerm).unwrap();

        let animals = &topics["Animals"];
        assert_eq!(animals["кіт"], "cat");
        assert_eq!(animals["пес"], "dog");
    }

    #[test]
    fn both_directions_are_mutually_inverse() {
        let forward = read_topics(Cursor::new(SAMPLE), Direction::TermToTranslation).unwrap();
        let reverse = read_topics(Cursor::new(SAMPLE), Direction::TranslationToTerm).unwrap();

        for (topic, words) in &forward {
            for (term, translation) in words {
                assert_eq!(&reverse[topic][translation], term);
            }
        }
    }

    #[test]
    fn rows_with_empty_fields_are_skipped() {
        let input = "\
topic,term,translation
Animals,cat,кіт
Animals,,пес
Animals,bird,
,horse,кінь
";
        let topics = read_topics(Cursor::new(input), Direction::TermToTranslation).unwrap();

        assert_eq!(topics.len(), 1);
        assert_eq!(topics["Animals"].len(), 1);
        assert_eq!(topics["Animals"]["cat"], "кіт");
    }

    #[test]
    fn malformed_rows_do_not_abort_the_load() {
        let input = "\
topic,term,translation
Animals,cat,кіт
just-one-field
Animals,dog,пес
";
        let topics = read_topics(Cursor::new(input), Direction::TermToTranslation).unwrap();

        assert_eq!(topics["Animals"].len(), 2);
    }

    #[test]
    fn empty_input_yields_no_topics() {
        let topics =
            read_topics(Cursor::new("topic,term,translation\n"), Direction::TermToTranslation)
                .unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn topics_iterate_in_sorted_order() {
        let input = "\
topic,term,translation
Zoo,lion,лев
Animals,cat,кіт
City,street,вулиця
";
        let topics = read_topics(Cursor::new(input), Direction::TermToTranslation).unwrap();
        let names: Vec<&str> = topics.keys().map(String::as_str).collect();
        assert_eq!(names, ["Animals", "City", "Zoo"]);
    }
}
