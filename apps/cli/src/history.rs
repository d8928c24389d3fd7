//! Persisted per-topic practice results.
//!
//! A single JSON file maps each topic name to the date it was last
//! practiced and a "correct/total" summary. Recording a topic
//! overwrites only that topic's entry; everything else is preserved.
//! Persistence is best-effort: an unreadable file loads as empty and
//! a failed save never interrupts the quiz session.

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use wordcards_core::RoundResult;

/// Saved outcome for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub date: String,
    pub summary: String,
}

/// The results file and its in-memory entries.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: BTreeMap<String, TopicRecord>,
}

impl History {
    /// Load the results file, falling back to an empty history when it
    /// is missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "ignoring unreadable results file");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn get(&self, topic: &str) -> Option<&TopicRecord> {
        self.entries.get(topic)
    }

    /// Record a round's outcome for a topic, replacing any prior entry.
    pub fn record(&mut self, topic: &str, result: &RoundResult) {
        self.entries.insert(
            topic.to_string(),
            TopicRecord {
                date: Local::now().format("%d.%m.%Y").to_string(),
                summary: format!("{}/{} correct", result.correct, result.total),
            },
        );
    }

    /// Write the history back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating results directory {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing results file {}", self.path.display()))
    }
}
