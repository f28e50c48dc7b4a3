use alloc::string::String;
use rand::rngs::SmallRng;

use super::{Player, PlayerError};
use crate::board::Board;
use crate::common::{Coord, Direction};
use crate::config::GameConfig;

/// Stacks its ships in the top-left corner and sweeps the opponent's grid
/// backwards from the bottom-right cell, ignoring every result.
pub struct AwfulPlayer<'g> {
    name: String,
    config: &'g GameConfig,
    last: Coord,
}

impl<'g> AwfulPlayer<'g> {
    pub fn new(name: impl Into<String>, config: &'g GameConfig) -> Self {
        Self {
            name: name.into(),
            config,
            last: Coord::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Ship `k` goes horizontally at row `k`, column 0. Fails on grids with
    /// fewer rows than ships or narrower than a ship.
    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), PlayerError> {
        for id in 0..self.config.ship_count() {
            board
                .place_ship(Coord::new(id as i32, 0), id, Direction::Horizontal)
                .map_err(|e| PlayerError::ShipRejected(id, e))?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Coord, PlayerError> {
        if self.last.col > 0 {
            self.last.col -= 1;
        } else {
            self.last.col = self.config.cols() as i32 - 1;
            if self.last.row > 0 {
                self.last.row -= 1;
            } else {
                self.last.row = self.config.rows() as i32 - 1;
            }
        }
        Ok(self.last)
    }
}
