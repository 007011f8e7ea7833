use alloc::string::String;
use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::MatchConfig,
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    /// Board placed, no shot accepted yet.
    Configured,
    InProgress,
    /// Every ship destroyed.
    Finished,
}

/// One playthrough: a board plus the configuration needed to start over.
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    board: Board,
}

/// Start a new match on a randomly placed board.
#[cfg(feature = "std")]
pub fn create_match(width: i32, height: i32, ship_count: i32) -> Result<Match, BoardError> {
    Match::new(width, height, ship_count)
}

impl Match {
    #[cfg(feature = "std")]
    pub fn new(width: i32, height: i32, ship_count: i32) -> Result<Self, BoardError> {
        Self::from_config(MatchConfig::new(width, height, ship_count))
    }

    #[cfg(feature = "std")]
    pub fn from_config(config: MatchConfig) -> Result<Self, BoardError> {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Create a match whose ship placement is drawn from `rng`.
    pub fn with_rng<R: Rng>(config: MatchConfig, rng: &mut R) -> Result<Self, BoardError> {
        let board = Board::with_rng(config.width, config.height, config.ship_count, rng)?;
        Ok(Self { config, board })
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fire at `(row, col)`; board errors pass through unchanged.
    pub fn fire(&mut self, row: i32, col: i32) -> Result<ShotOutcome, BoardError> {
        let outcome = self.board.fire(row, col)?;
        if self.is_finished() {
            info!(
                "match finished after {} shots ({} hits)",
                self.board.shots_fired(),
                self.board.hits()
            );
        }
        Ok(outcome)
    }

    /// Fire at `(row, col)`; `true` if a ship was struck.
    pub fn shoot(&mut self, row: i32, col: i32) -> Result<bool, BoardError> {
        self.fire(row, col).map(ShotOutcome::is_hit)
    }

    pub fn is_finished(&self) -> bool {
        self.board.all_destroyed()
    }

    pub fn status(&self) -> MatchStatus {
        if self.is_finished() {
            MatchStatus::Finished
        } else if self.board.shots_fired() == 0 {
            MatchStatus::Configured
        } else {
            MatchStatus::InProgress
        }
    }

    /// Throw the board away and place a fresh one with the same configuration.
    #[cfg(feature = "std")]
    pub fn reset(&mut self) -> Result<(), BoardError> {
        self.reset_with_rng(&mut rand::rng())
    }

    /// Like `reset`, drawing the new placement from `rng`.
    /// On error the current board is kept.
    pub fn reset_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let cfg = self.config;
        self.board = Board::with_rng(cfg.width, cfg.height, cfg.ship_count, rng)?;
        debug!("match reset to {}x{} with {} ships", cfg.width, cfg.height, cfg.ship_count);
        Ok(())
    }

    pub fn render_board(&self) -> String {
        self.board.render()
    }
}
