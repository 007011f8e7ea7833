//! A single grid cell: ship occupancy plus one-shot hit state.

use core::fmt;

use crate::common::BoardError;

/// Display state of a cell, derived from occupancy and hit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not fired on yet.
    Water,
    /// Fired on and a ship was there.
    Hit,
    /// Fired on and empty.
    Miss,
}

impl CellView {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            CellView::Water => '~',
            CellView::Hit => 'X',
            CellView::Miss => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    occupied: bool,
    hit: bool,
}

impl Cell {
    /// An empty, unhit cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub(crate) fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Fire on this cell. Returns whether a ship occupied it.
    ///
    /// A cell can only be hit once; a second call fails with
    /// [`BoardError::AlreadyHit`] and leaves the cell untouched.
    pub fn mark_hit(&mut self) -> Result<bool, BoardError> {
        if self.hit {
            return Err(BoardError::AlreadyHit);
        }
        self.hit = true;
        Ok(self.occupied)
    }

    pub fn view(&self) -> CellView {
        match (self.hit, self.occupied) {
            (false, _) => CellView::Water,
            (true, true) => CellView::Hit,
            (true, false) => CellView::Miss,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view().symbol())
    }
}
