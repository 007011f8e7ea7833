//! Common types for the game engine: coordinates, shot outcomes and board errors.

use thiserror::Error;

/// A `(row, col)` position on the board.
pub type Coord = (usize, usize);

/// Result of a shot that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that still has unhit cells.
    Hit,
    /// Shot struck the last unhit cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// `true` for any shot that struck a ship.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board and Match operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Width, height or ship count is zero or negative.
    #[error("board dimensions and ship count must be positive")]
    InvalidDimension,
    /// Width or height is below the 2x2 minimum.
    #[error("the minimum board size is 2x2")]
    BoardTooSmall,
    /// More ships requested than the board has cells.
    #[error("cannot place more ships than there are cells")]
    TooManyShips,
    /// Shot coordinate lies outside the grid.
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: i32, col: i32 },
    /// Shot targets a cell that was already fired on.
    #[error("this cell has already been hit")]
    AlreadyHit,
    /// Ship built from an empty or repeating coordinate list.
    #[error("a ship needs at least one coordinate and no repeats")]
    InvalidShip,
}
