use alloc::string::String;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, PlayerError};
use crate::board::Board;
use crate::common::{Coord, Direction, Shot};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::placement;

/// Opening shots restricted to the top half of the grid.
const OPENING_SHOTS: usize = 12;
/// Draws allowed per opening shot before the restriction is dropped.
const OPENING_DRAWS: usize = 50;
/// Furthest distance probed from a wounded cell.
const PROBE_REACH: i32 = 4;

/// What the player has learned about one cell of the opponent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Belief {
    Unknown,
    Miss,
    /// Hit, ship not yet known to be destroyed.
    Wounded,
    /// Part of a ship known to be destroyed.
    Sunk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Probing,
    Tracking,
}

/// Random scanning, then cross probing around a hit until a second hit
/// gives the ship's axis, then extension from both ends of the known run.
///
/// Everything it knows comes from its own attack history, kept in a
/// belief grid.
pub struct GoodPlayer<'g> {
    name: String,
    config: &'g GameConfig,
    belief: Grid<Belief>,
    state: State,
    /// Scanning shots fired so far.
    scans: usize,
    axis: Direction,
    /// Top or left end of the tracked run.
    head: Coord,
    /// Bottom or right end of the tracked run.
    tail: Coord,
    head_done: bool,
    tail_done: bool,
    /// A destroy was reported while some wounded cell may belong to another
    /// ship, so probing continues instead of scanning.
    unresolved: bool,
}

impl<'g> GoodPlayer<'g> {
    pub fn new(name: impl Into<String>, config: &'g GameConfig) -> Self {
        Self {
            name: name.into(),
            config,
            belief: Grid::new(config.dims(), Belief::Unknown),
            state: State::Scanning,
            scans: 0,
            axis: Direction::Horizontal,
            head: Coord::default(),
            tail: Coord::default(),
            head_done: false,
            tail_done: false,
            unresolved: false,
        }
    }

    /// The player's picture of the opponent's grid.
    pub fn belief(&self) -> &Grid<Belief> {
        &self.belief
    }

    fn is_unknown(&self, coord: Coord) -> bool {
        self.belief.get(coord) == Some(&Belief::Unknown)
    }

    fn is_miss(&self, coord: Coord) -> bool {
        self.belief.get(coord) == Some(&Belief::Miss)
    }

    fn scan(&mut self, rng: &mut SmallRng) -> Coord {
        let dims = self.config.dims();
        if !self.belief.values().any(|&b| b == Belief::Unknown) {
            return dims.random_coord(rng);
        }
        self.scans += 1;
        let top_half = dims.rows() / 2;
        if self.scans <= OPENING_SHOTS && top_half > 0 {
            let mut coord = Coord::default();
            for draw in 1..=OPENING_DRAWS {
                coord = Coord::new(
                    rng.random_range(0..top_half) as i32,
                    rng.random_range(0..dims.cols()) as i32,
                );
                if draw == OPENING_DRAWS {
                    debug!("{}: top half crowded, scanning the whole grid", self.name);
                    self.scans = OPENING_SHOTS + 1;
                    break;
                }
                if self.is_unknown(coord) {
                    break;
                }
            }
            return coord;
        }
        loop {
            let coord = dims.random_coord(rng);
            if self.is_unknown(coord) {
                return coord;
            }
        }
    }

    /// Next cell past either end of the run, marking ends that cannot grow.
    fn extend(&mut self) -> Option<Coord> {
        let (before, after) = match self.axis {
            Direction::Horizontal => (self.head.offset(0, -1), self.tail.offset(0, 1)),
            Direction::Vertical => (self.head.offset(-1, 0), self.tail.offset(1, 0)),
        };
        if !self.head_done && self.is_unknown(before) {
            return Some(before);
        }
        self.head_done = true;
        if !self.tail_done && self.is_unknown(after) {
            return Some(after);
        }
        self.tail_done = true;
        None
    }

    /// Nearest unknown cell on the cross around the tracked ends, checking
    /// up, left, down, right at each distance.
    fn probe(&mut self, rng: &mut SmallRng) -> Coord {
        if self.unresolved {
            let last_wounded = self
                .belief
                .iter()
                .filter(|(_, b)| **b == Belief::Wounded)
                .map(|(coord, _)| coord)
                .last();
            if let Some(wounded) = last_wounded {
                self.head = wounded;
                self.tail = wounded;
            }
        }
        for reach in 1..=PROBE_REACH {
            let candidates = [
                self.head.offset(-reach, 0),
                self.head.offset(0, -reach),
                self.tail.offset(reach, 0),
                self.tail.offset(0, reach),
            ];
            if let Some(&coord) = candidates.iter().find(|&&c| self.is_unknown(c)) {
                return coord;
            }
        }
        self.unresolved = true;
        self.config.dims().random_coord(rng)
    }

    /// Mark the `length` cells ending at `last` as sunk, running away from
    /// the tracked head along the axis the final hit implies.
    fn mark_sunk(&mut self, last: Coord, length: usize) {
        self.axis = if self.head.col == last.col {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let forward = match self.axis {
            Direction::Vertical => last.row < self.head.row,
            Direction::Horizontal => last.col < self.head.col,
        };
        for n in 0..length as i32 {
            let step = if forward { n } else { -n };
            if let Some(cell) = self.belief.get_mut(last.step(self.axis, step)) {
                *cell = Belief::Sunk;
            }
        }
    }

    fn record_destroy(&mut self, target: Coord, length: usize) {
        self.mark_sunk(target, length);
        if self.unresolved && !self.belief.values().any(|&b| b == Belief::Wounded) {
            self.unresolved = false;
        }
        self.head_done = false;
        self.tail_done = false;
        self.state = if self.unresolved {
            State::Probing
        } else {
            State::Scanning
        };
        debug!("{}: destroyed a ship at {target}, now {:?}", self.name, self.state);
    }

    fn record_wound(&mut self, target: Coord) {
        if let Some(cell) = self.belief.get_mut(target) {
            *cell = Belief::Wounded;
        }
        match self.state {
            State::Scanning => {
                self.state = State::Probing;
                self.head = target;
                self.tail = target;
            }
            State::Probing => {
                if target.row < self.head.row {
                    self.head.row = target.row;
                    self.axis = Direction::Vertical;
                } else if target.row > self.head.row {
                    self.tail.row = target.row;
                    self.axis = Direction::Vertical;
                } else if target.col < self.head.col {
                    self.head.col = target.col;
                    self.axis = Direction::Horizontal;
                } else {
                    self.tail.col = target.col;
                    self.axis = Direction::Horizontal;
                }
                self.state = State::Tracking;
            }
            State::Tracking => {
                let last_row = self.config.rows() as i32 - 1;
                let last_col = self.config.cols() as i32 - 1;
                match self.axis {
                    Direction::Horizontal => {
                        if self.head.col == 0 || self.is_miss(self.head.offset(0, -1)) {
                            self.head_done = true;
                        }
                        if self.tail.col == last_col || self.is_miss(self.tail.offset(0, 1)) {
                            self.tail_done = true;
                        }
                    }
                    Direction::Vertical => {
                        if self.head.row == 0 || self.is_miss(self.head.offset(-1, 0)) {
                            self.head_done = true;
                        }
                        if self.tail.row == last_row || self.is_miss(self.tail.offset(1, 0)) {
                            self.tail_done = true;
                        }
                    }
                }
                if self.head_done {
                    self.tail = target;
                } else {
                    self.head = target;
                }
                if self.head_done && self.tail_done {
                    self.unresolved = true;
                    self.state = State::Probing;
                }
            }
        }
        trace!("{}: hit at {target}, now {:?}", self.name, self.state);
    }
}

impl Player for GoodPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), PlayerError> {
        placement::place_fleet(board, rng)?;
        Ok(())
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Coord, PlayerError> {
        if self.state == State::Scanning {
            return Ok(self.scan(rng));
        }
        if self.state == State::Tracking {
            if let Some(coord) = self.extend() {
                return Ok(coord);
            }
            trace!("{}: both ends blocked, probing again", self.name);
            self.state = State::Probing;
            self.unresolved = true;
        }
        Ok(self.probe(rng))
    }

    fn record_attack_result(&mut self, target: Coord, outcome: Option<Shot>) {
        match outcome {
            None => {}
            Some(Shot::Miss) => {
                if let Some(cell) = self.belief.get_mut(target) {
                    *cell = Belief::Miss;
                }
            }
            Some(Shot::Hit) => self.record_wound(target),
            Some(Shot::Destroyed(id)) => self.record_destroy(target, self.config.ship_length(id)),
        }
    }
}
