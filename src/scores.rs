#![cfg(feature = "std")]

//! Persisted high-score table.
//!
//! Each win appends an entry carrying the player's new running total and the
//! time it was recorded. The table is stored as pretty-printed JSON.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::config::WIN_BONUS;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub points: u32,
    /// Unix timestamp (seconds, UTC) of the win. Zero for files written before
    /// timestamps were recorded.
    #[serde(default)]
    pub recorded_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from `path`. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ScoreError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Current running total for `player` (0 if unknown).
    pub fn total_for(&self, player: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.player == player)
            .map(|e| e.points)
            .max()
            .unwrap_or(0)
    }

    /// Add the win bonus to `player`'s total and record the new total, stamped
    /// with the current time.
    pub fn award_win(&mut self, player: &str) -> Result<&ScoreEntry, ScoreError> {
        self.award_win_at(player, OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Same as [`ScoreTable::award_win`] with an explicit Unix timestamp.
    pub fn award_win_at(
        &mut self,
        player: &str,
        recorded_at: i64,
    ) -> Result<&ScoreEntry, ScoreError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(ScoreError::EmptyPlayerName);
        }
        let points = self.total_for(player) + WIN_BONUS;
        info!("awarding {} points to {} (total {})", WIN_BONUS, player, points);
        self.entries.push(ScoreEntry {
            player: player.to_owned(),
            points,
            recorded_at,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Best entry per player, highest first, ties broken by name.
    pub fn top(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut best: BTreeMap<&str, &ScoreEntry> = BTreeMap::new();
        for e in &self.entries {
            let slot = best.entry(e.player.as_str()).or_insert(e);
            if e.points > slot.points {
                *slot = e;
            }
        }
        let mut ranked: Vec<ScoreEntry> = best.into_values().cloned().collect();
        // BTreeMap iteration is name-ordered, and the sort is stable.
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked.truncate(limit);
        ranked
    }
}
