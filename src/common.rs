//! Common types for the game: coordinates, directions, shot outcomes and
//! board errors.

use core::fmt;
use thiserror::Error;

/// Index of a ship in the fleet configuration (insertion order).
pub type ShipId = usize;

/// A (row, column) pair. Zero based; validity depends on the grid it is
/// used against, so negative values are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by the given row and column deltas.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The `n`th cell of a run anchored here and extending along `direction`.
    pub const fn step(self, direction: Direction, n: i32) -> Self {
        match direction {
            Direction::Horizontal => self.offset(0, n),
            Direction::Vertical => self.offset(n, 0),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Which way a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Along the columns of the anchor's row.
    Horizontal,
    /// Along the rows of the anchor's column.
    Vertical,
}

/// Outcome of an accepted attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Miss,
    /// Hit a ship segment without finishing the ship.
    Hit,
    /// Hit the last intact segment of the ship.
    Destroyed(ShipId),
}

impl Shot {
    pub fn is_hit(self) -> bool {
        !matches!(self, Shot::Miss)
    }

    pub fn destroyed(self) -> Option<ShipId> {
        match self {
            Shot::Destroyed(id) => Some(id),
            _ => None,
        }
    }
}

/// Reasons a board refuses to place, remove or attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("ship {0} is not part of the fleet")]
    UnknownShip(ShipId),
    #[error("ship {0} is already placed")]
    AlreadyPlaced(ShipId),
    #[error("ship {0} is not placed")]
    NotPlaced(ShipId),
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),
    #[error("the ship would leave the grid")]
    RunOutOfBounds,
    #[error("{0} is already occupied")]
    Occupied(Coord),
    #[error("{0} does not hold ship {1}")]
    WrongOccupant(Coord, ShipId),
    #[error("{0} was already attacked")]
    AlreadyAttacked(Coord),
}
