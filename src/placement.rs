//! Backtracking search for a legal layout of the whole fleet.

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{Direction, ShipId};

/// Number of fresh random blockings tried before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no legal layout found for the fleet after {attempts} attempts")]
pub struct PlacementError {
    pub attempts: usize,
}

/// Place ships `first..` on `board`, scanning anchors row-major and trying
/// horizontal before vertical at each one. A failed deeper level undoes
/// the current ship and moves on to the next candidate.
///
/// Returns `false` with the board as it was found when no layout exists.
pub fn backtrack(board: &mut Board<'_>, first: ShipId) -> bool {
    let config = board.config();
    if first >= config.ship_count() {
        return true;
    }
    let dims = config.dims();
    for anchor in dims.coords() {
        for direction in [Direction::Horizontal, Direction::Vertical] {
            if board.place_ship(anchor, first, direction).is_err() {
                continue;
            }
            if backtrack(board, first + 1) {
                return true;
            }
            // Undoing a placement made a moment ago cannot fail.
            let _ = board.unplace_ship(anchor, first, direction);
        }
    }
    false
}

/// Lay out the whole fleet on an empty `board`.
///
/// Each attempt blocks half of the grid at random, runs [`backtrack`] on
/// what is left and unblocks again, so successive attempts and games
/// produce different layouts.
pub fn place_fleet<R: Rng + ?Sized>(board: &mut Board<'_>, rng: &mut R) -> Result<(), PlacementError> {
    for attempt in 1..=PLACEMENT_ATTEMPTS {
        board.block(rng);
        let placed = backtrack(board, 0);
        board.unblock();
        if placed {
            debug!("fleet placed on attempt {attempt}");
            return Ok(());
        }
    }
    warn!("fleet placement gave up after {PLACEMENT_ATTEMPTS} attempts");
    Err(PlacementError {
        attempts: PLACEMENT_ATTEMPTS,
    })
}
