//! Entry point for the wordcards trainer.

use std::process;

fn main() {
    if let Err(err) = wordcards_cli::run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
