//! High score leaderboard system
//!
//! Persisted as a JSON array next to the executable's working directory,
//! tracks the top 10 scores.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_NAME_LEN;
use crate::persistence;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Name recorded when the player leaves it blank
pub const DEFAULT_NAME: &str = "AAA";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's name (at most 12 characters)
    pub name: String,
    /// Final score
    pub score: u32,
    /// Day the score was set, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// High score leaderboard.
///
/// Entries are kept sorted descending by score. When backed by a file, every
/// mutation is written through; write failures are logged and the in-memory
/// list stays authoritative.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<HighScoreEntry>,
    path: Option<PathBuf>,
}

impl Leaderboard {
    /// Leaderboard with no backing file
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load high scores from `path`.
    ///
    /// Records that fail to parse are dropped one by one. A missing,
    /// unreadable or unparsable file gives an empty leaderboard.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match persistence::read_json::<Vec<serde_json::Value>>(&path) {
            Ok(Some(records)) => records,
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Discarding unreadable high scores: {e}");
                Vec::new()
            }
        };

        let total = records.len();
        let mut entries: Vec<HighScoreEntry> = records
            .into_iter()
            .filter_map(|value| serde_json::from_value::<HighScoreEntry>(value).ok())
            .map(|mut entry| {
                entry.name = clean_name(&entry.name);
                entry
            })
            .collect();
        if entries.len() < total {
            log::warn!(
                "Dropped {} malformed high score record(s)",
                total - entries.len()
            );
        }
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);

        log::info!("Loaded {} high scores from {}", entries.len(), path.display());
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn is_high_score(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a score dated today
    pub fn add(&mut self, name: &str, score: u32) -> Option<usize> {
        let today = chrono::Local::now().date_naive();
        self.add_dated(name, score, today)
    }

    /// Record a score and persist.
    ///
    /// Returns the rank achieved (1-indexed), or `None` if the entry fell off
    /// the bottom of a full board.
    pub fn add_dated(&mut self, name: &str, score: u32, date: NaiveDate) -> Option<usize> {
        let entry = HighScoreEntry {
            name: clean_name(name),
            score,
            date,
        };

        // Ties go after existing entries with the same score
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        self.save();

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// First `n` entries (fewer if the board is shorter)
    pub fn top(&self, n: usize) -> &[HighScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match persistence::write_json(path, &self.entries) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Could not save high scores: {e}"),
        }
    }
}

/// Trim, cap at 12 characters, and substitute a default for blank names
pub fn clean_name(name: &str) -> String {
    let capped: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    let capped = capped.trim_end();
    if capped.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        capped.to_string()
    }
}
