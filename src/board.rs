//! Game board: cell grid, random ship placement and shot evaluation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use log::debug;
use rand::Rng;

use crate::cell::{Cell, CellView};
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::MIN_SIDE;
use crate::ship::Ship;

/// Main board state: grid of cells, ships and the count still afloat.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Vec<Cell>>,
    ships: Vec<Ship>,
    ships_remaining: usize,
    shots_fired: usize,
    hits: usize,
}

/// Check construction parameters, returning them as `(width, height, ship_count)`.
fn validate(width: i32, height: i32, ship_count: i32) -> Result<(usize, usize, usize), BoardError> {
    if width <= 0 || height <= 0 || ship_count <= 0 {
        return Err(BoardError::InvalidDimension);
    }
    let (width, height, ship_count) = (width as usize, height as usize, ship_count as usize);
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(BoardError::BoardTooSmall);
    }
    // Capacity is computed in u64 so large sides cannot overflow on 32-bit targets.
    if ship_count as u64 > width as u64 * height as u64 {
        return Err(BoardError::TooManyShips);
    }
    Ok((width, height, ship_count))
}

impl Board {
    /// Create a board with `ship_count` single-cell ships at random positions,
    /// using the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new(width: i32, height: i32, ship_count: i32) -> Result<Self, BoardError> {
        Self::with_rng(width, height, ship_count, &mut rand::rng())
    }

    /// Create a board, drawing ship positions from `rng`.
    pub fn with_rng<R: Rng>(
        width: i32,
        height: i32,
        ship_count: i32,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let (width, height, ship_count) = validate(width, height, ship_count)?;
        let mut board = Board {
            width,
            height,
            grid: (0..height).map(|_| alloc::vec![Cell::new(); width]).collect(),
            ships: Vec::with_capacity(ship_count),
            ships_remaining: ship_count,
            shots_fired: 0,
            hits: 0,
        };
        board.place_ships(ship_count, rng);
        debug!(
            "placed {} ships on a {}x{} board",
            ship_count, board.width, board.height
        );
        Ok(board)
    }

    /// Rejection sampling: draw uniform cells until a free one turns up.
    /// Terminates because validation guarantees `count <= width * height`.
    fn place_ships<R: Rng>(&mut self, count: usize, rng: &mut R) {
        while self.ships.len() < count {
            let row = rng.random_range(0..self.height);
            let col = rng.random_range(0..self.width);
            let cell = &mut self.grid[row][col];
            if !cell.is_occupied() {
                cell.occupy();
                self.ships.push(Ship::single((row, col)));
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of ships not yet destroyed.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Accepted shots so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Accepted shots that struck a ship.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns `true` when all ships are destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_view(&self, row: usize, col: usize) -> Option<CellView> {
        self.cell(row, col).map(Cell::view)
    }

    /// Coordinates of every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_occupied())
                .map(move |(c, _)| (r, c))
        })
    }

    fn locate(&self, row: i32, col: i32) -> Result<Coord, BoardError> {
        let out = BoardError::OutOfBounds { row, col };
        let r = usize::try_from(row).map_err(|_| out)?;
        let c = usize::try_from(col).map_err(|_| out)?;
        if r >= self.height || c >= self.width {
            return Err(out);
        }
        Ok((r, c))
    }

    /// Fire at `(row, col)` and report whether it missed, hit or sank a ship.
    ///
    /// The cell is marked first; only an accepted shot reaches the ships, so a
    /// rejected shot leaves the board exactly as it was.
    pub fn fire(&mut self, row: i32, col: i32) -> Result<ShotOutcome, BoardError> {
        let (r, c) = self.locate(row, col)?;
        // Fails with AlreadyHit before anything else is touched.
        let occupied = self.grid[r][c].mark_hit()?;
        let mut outcome = ShotOutcome::Miss;
        if occupied {
            if let Some(ship) = self.ships.iter_mut().find(|s| s.contains((r, c))) {
                ship.register_hit((r, c));
                outcome = if ship.is_destroyed() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
            }
        }
        self.shots_fired += 1;
        if outcome.is_hit() {
            self.hits += 1;
        }
        if outcome == ShotOutcome::Sunk {
            self.ships_remaining -= 1;
        }
        Ok(outcome)
    }

    /// Fire at `(row, col)`; `true` if a ship was struck.
    pub fn evaluate_shot(&mut self, row: i32, col: i32) -> Result<bool, BoardError> {
        self.fire(row, col).map(ShotOutcome::is_hit)
    }

    /// Text grid: a header of column indices, then each row prefixed by its index.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(" ")?;
        for c in 0..self.width {
            write!(out, " {}", c)?;
        }
        out.write_char('\n')?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(out, "{}", r)?;
            for cell in row {
                write!(out, " {}", cell)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  ships_remaining: {},\n  shots_fired: {},\n  ships: {:?}\n}}",
            self.width, self.height, self.ships_remaining, self.shots_fired, self.ships
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn validation_order() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            Board::with_rng(0, 5, 1, &mut rng).unwrap_err(),
            BoardError::InvalidDimension
        );
        assert_eq!(
            Board::with_rng(1, 5, 0, &mut rng).unwrap_err(),
            BoardError::InvalidDimension
        );
        assert_eq!(
            Board::with_rng(1, 5, 9, &mut rng).unwrap_err(),
            BoardError::BoardTooSmall
        );
        assert_eq!(
            Board::with_rng(2, 2, 5, &mut rng).unwrap_err(),
            BoardError::TooManyShips
        );
    }

    #[test]
    fn capacity_check_does_not_overflow() {
        assert_eq!(
            validate(i32::MAX, i32::MAX, i32::MAX),
            Ok((i32::MAX as usize, i32::MAX as usize, i32::MAX as usize))
        );
        assert_eq!(validate(3, 3, 10), Err(BoardError::TooManyShips));
        assert_eq!(validate(65_536, 65_536, i32::MAX), Ok((65_536, 65_536, i32::MAX as usize)));
    }

    #[test]
    fn hit_marks_cell_and_ship_together() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut board = Board::with_rng(2, 2, 1, &mut rng).unwrap();
        let (r, c) = board.occupied().next().unwrap();
        assert_eq!(board.fire(r as i32, c as i32), Ok(ShotOutcome::Sunk));
        assert!(board.cell(r, c).unwrap().is_hit());
        assert!(board.ships()[0].hits().contains(&(r, c)));

        let before = board.clone();
        assert_eq!(board.fire(r as i32, c as i32), Err(BoardError::AlreadyHit));
        assert_eq!(board, before);
        assert_eq!(board.ships()[0].hits().len(), 1);
    }

    #[test]
    fn full_board_places_every_cell() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = Board::with_rng(3, 2, 6, &mut rng).unwrap();
        assert_eq!(board.occupied().count(), 6);
        assert_eq!(board.ships_remaining(), 6);
    }

    #[test]
    fn render_layout() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = Board::with_rng(3, 2, 1, &mut rng).unwrap();
        assert_eq!(board.render(), "  0 1 2\n0 ~ ~ ~\n1 ~ ~ ~\n");
        assert_eq!(alloc::format!("{}", board), board.render());
    }
}
