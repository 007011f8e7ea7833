//! Ships and their per-coordinate hit tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};

/// A ship occupying one or more board coordinates.
///
/// Placement only ever produces single-cell ships, but hit tracking works for
/// any shape: the ship is destroyed once every one of its coordinates is hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    positions: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Ship {
    /// Build a ship from an ordered list of distinct coordinates.
    pub fn new(positions: Vec<Coord>) -> Result<Self, BoardError> {
        if positions.is_empty() {
            return Err(BoardError::InvalidShip);
        }
        let distinct: BTreeSet<Coord> = positions.iter().copied().collect();
        if distinct.len() != positions.len() {
            return Err(BoardError::InvalidShip);
        }
        Ok(Self {
            positions,
            hits: BTreeSet::new(),
        })
    }

    /// A one-cell ship at `coord`.
    pub fn single(coord: Coord) -> Self {
        let mut positions = Vec::with_capacity(1);
        positions.push(coord);
        Self {
            positions,
            hits: BTreeSet::new(),
        }
    }

    /// Coordinates occupied by the ship, in construction order.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    /// Coordinates of the ship that have been hit so far.
    pub fn hits(&self) -> &BTreeSet<Coord> {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.positions.contains(&coord)
    }

    /// Register a shot at `coord`.
    /// Returns `true` only for a new hit on this ship; repeats and misses return `false`.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        self.contains(coord) && self.hits.insert(coord)
    }

    /// Check if every coordinate of the ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hits.len() == self.positions.len()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ positions: {:?}, hits: {}, destroyed: {} }}",
            self.positions,
            self.hits.len(),
            self.is_destroyed(),
        )
    }
}
