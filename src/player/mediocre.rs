use alloc::string::String;
use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, PlayerError};
use crate::board::Board;
use crate::common::{Coord, Shot};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::placement;

/// Cells probed on each side of a hit.
const CROSS_REACH: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Firing at random unattacked cells.
    Searching,
    /// Firing at random unattacked cells within reach of `center` along its
    /// row or column. `remaining` counts how many such cells are left.
    Probing { center: Coord, remaining: usize },
}

/// Random search that switches to random probing along the row and column
/// of a hit until the ship is destroyed or the probe runs out of cells.
pub struct MediocrePlayer<'g> {
    name: String,
    config: &'g GameConfig,
    attacked: Grid<bool>,
    mode: Mode,
}

impl<'g> MediocrePlayer<'g> {
    pub fn new(name: impl Into<String>, config: &'g GameConfig) -> Self {
        Self {
            name: name.into(),
            config,
            attacked: Grid::new(config.dims(), false),
            mode: Mode::Searching,
        }
    }

    fn is_fresh(&self, coord: Coord) -> bool {
        self.attacked.get(coord) == Some(&false)
    }

    /// Unattacked cells in the cross of reach [`CROSS_REACH`] around
    /// `center`.
    fn cross_size(&self, center: Coord) -> usize {
        (-CROSS_REACH..=CROSS_REACH)
            .flat_map(|d| [center.offset(0, d), center.offset(d, 0)])
            .filter(|&c| self.is_fresh(c))
            .count()
    }

    fn random_fresh(&self, rng: &mut SmallRng) -> Option<Coord> {
        if !self.attacked.values().any(|&a| !a) {
            return None;
        }
        let dims = self.config.dims();
        loop {
            let coord = dims.random_coord(rng);
            if self.is_fresh(coord) {
                return Some(coord);
            }
        }
    }
}

impl Player for MediocrePlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), PlayerError> {
        placement::place_fleet(board, rng)?;
        Ok(())
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Coord, PlayerError> {
        let target = match self.mode {
            Mode::Probing { center, remaining } if remaining > 0 => loop {
                let along_column = rng.random_range(0..2) == 0;
                let reach = rng.random_range(0..=2 * CROSS_REACH) - CROSS_REACH;
                let coord = if along_column {
                    center.offset(reach, 0)
                } else {
                    center.offset(0, reach)
                };
                if self.is_fresh(coord) {
                    self.mode = Mode::Probing {
                        center,
                        remaining: remaining - 1,
                    };
                    break coord;
                }
            },
            _ => {
                self.mode = Mode::Searching;
                // Every cell attacked means the match is already over; any
                // coordinate will do.
                self.random_fresh(rng)
                    .unwrap_or_else(|| self.config.dims().random_coord(rng))
            }
        };
        if let Some(cell) = self.attacked.get_mut(target) {
            *cell = true;
        }
        Ok(target)
    }

    fn record_attack_result(&mut self, target: Coord, outcome: Option<Shot>) {
        match outcome {
            Some(Shot::Destroyed(_)) => {
                trace!("{}: ship destroyed, back to searching", self.name);
                self.mode = Mode::Searching;
            }
            Some(Shot::Hit) => {
                if self.mode == Mode::Searching {
                    let remaining = self.cross_size(target);
                    trace!("{}: hit at {target}, probing {remaining} cells", self.name);
                    self.mode = Mode::Probing {
                        center: target,
                        remaining,
                    };
                }
                if let Mode::Probing { remaining: 0, .. } = self.mode {
                    self.mode = Mode::Searching;
                }
            }
            Some(Shot::Miss) | None => {
                if let Mode::Probing { remaining: 0, .. } = self.mode {
                    self.mode = Mode::Searching;
                }
            }
        }
    }
}
