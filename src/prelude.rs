//! Commonly used types and utilities for ease of import.

pub use crate::{run_match, Board, BoardError, Match, MatchConfig, MatchStatus, Player, ShotOutcome};

#[cfg(feature = "std")]
pub use crate::{create_match, CliPlayer, ScoreTable};
