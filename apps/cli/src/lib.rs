//! wordcards CLI — interactive vocabulary flashcard trainer.

pub mod history;
pub mod loader;
pub mod session;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::history::History;
use crate::loader::Direction;
use crate::session::read_line;

#[derive(Parser)]
#[command(name = "wordcards", version, about = "Vocabulary flashcard trainer")]
struct Args {
    /// Path to the word list CSV (columns: topic, term, translation)
    #[arg(short, long, default_value = "data/wordcards.csv")]
    data: PathBuf,

    /// Where to keep per-topic results (defaults to the user data dir)
    #[arg(long)]
    results: Option<PathBuf>,
}

fn default_results_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("wordcards").join("results.json"))
        .unwrap_or_else(|| PathBuf::from("results.json"))
}

pub fn run() -> Result<()> {
    // Default to warn so log lines do not interleave with the quiz.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let results_path = args.results.unwrap_or_else(default_results_path);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu_loop(&mut input, &mut out, &args.data, &results_path)
}

/// Outer menu: direction choice, then topic choice, then practice.
fn menu_loop<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    data: &Path,
    results_path: &Path,
) -> Result<()> {
    writeln!(out, "Welcome to wordcards!")?;

    loop {
        write!(
            out,
            "\nChoose the card direction or press Enter to quit.\n\
             [1] term → translation  [2] translation → term: "
        )?;
        out.flush()?;

        let choice = match read_line(input)? {
            Some(line) if !line.trim().is_empty() => line,
            _ => return Ok(()),
        };
        let direction = match choice.trim() {
            "1" => Direction::TermToTranslation,
            "2" => Direction::TranslationToTerm,
            _ => {
                writeln!(out, "Invalid direction choice, try again.")?;
                continue;
            }
        };

        let topics = loader::load_topics(data, direction)?;
        if topics.is_empty() {
            writeln!(out, "The word list has no usable rows.")?;
            continue;
        }

        topic_menu(input, out, direction, &topics, results_path)?;
    }
}

fn topic_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    direction: Direction,
    topics: &loader::Topics,
    results_path: &Path,
) -> Result<()> {
    let names: Vec<&String> = topics.keys().collect();

    loop {
        // Reload each time so the menu shows the result just saved.
        let mut history = History::load(results_path);

        writeln!(out, "\nTopics ({}):", direction.label())?;
        for (position, name) in names.iter().enumerate() {
            write!(out, "{}. {} ({} words)", position + 1, name, topics[*name].len())?;
            if let Some(record) = history.get(name.as_str()) {
                write!(out, " — last practiced {}: {}", record.date, record.summary)?;
            }
            writeln!(out)?;
        }
        write!(out, "Enter a topic number or press Enter to go back: ")?;
        out.flush()?;

        let choice = match read_line(input)? {
            Some(line) if !line.trim().is_empty() => line,
            _ => return Ok(()),
        };
        let Ok(number) = choice.trim().parse::<usize>() else {
            writeln!(out, "That is not a topic number, try again.")?;
            continue;
        };
        let Some(name) = number.checked_sub(1).and_then(|i| names.get(i)) else {
            writeln!(out, "No topic with that number, try again.")?;
            continue;
        };

        session::practice_topic(input, out, name.as_str(), &topics[*name], &mut history)?;
    }
}
