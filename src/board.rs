//! One player's grid: ship placement, attacks and rendering.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, Coord, Direction, ShipId, Shot};
use crate::config::GameConfig;
use crate::grid::Grid;

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, or not yet known.
    Empty,
    /// Temporarily unavailable; only exists while a placement search runs.
    Blocked,
    /// Intact segment of a ship.
    Ship(ShipId),
    /// Ship segment that has been hit.
    Hit,
    /// Attacked water.
    Miss,
}

impl Cell {
    /// Whether the cell has already received an attack.
    pub fn is_attacked(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// A ship currently on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacedShip {
    id: ShipId,
    hits: usize,
}

/// Grid plus ship bookkeeping for one contestant.
#[derive(Clone)]
pub struct Board<'g> {
    config: &'g GameConfig,
    cells: Grid<Cell>,
    ships: Vec<PlacedShip>,
}

impl<'g> Board<'g> {
    /// Empty board sized to the configuration.
    pub fn new(config: &'g GameConfig) -> Self {
        Board {
            config,
            cells: Grid::new(config.dims(), Cell::Empty),
            ships: Vec::new(),
        }
    }

    pub fn config(&self) -> &'g GameConfig {
        self.config
    }

    /// Raw contents of a cell, `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord).copied()
    }

    /// Ids of the ships currently on the grid, in placement order.
    pub fn placed_ships(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.ships.iter().map(|s| s.id)
    }

    /// Hits taken so far by ship `id`, `None` if it is not placed.
    pub fn hits_on(&self, id: ShipId) -> Option<usize> {
        self.ships.iter().find(|s| s.id == id).map(|s| s.hits)
    }

    /// Reset every cell to empty and forget all ships.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.ships.clear();
    }

    /// Mark half of the cells (rounded down) as blocked, drawing empty cells
    /// uniformly until the quota is met. When fewer empty cells remain than
    /// the quota, all of them are blocked.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let dims = self.cells.dims();
        let empty = self.cells.values().filter(|&&c| c == Cell::Empty).count();
        let quota = (dims.cell_count() / 2).min(empty);
        let mut blocked = 0;
        while blocked < quota {
            let cell = &mut self.cells[dims.random_coord(rng)];
            if *cell == Cell::Empty {
                *cell = Cell::Blocked;
                blocked += 1;
            }
        }
        trace!("blocked {blocked} cells");
    }

    /// Return every blocked cell to empty.
    pub fn unblock(&mut self) {
        for cell in self.cells.values_mut() {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
    }

    /// Cells covered by ship `id` anchored at `anchor`, if they all lie on
    /// the grid.
    fn run(&self, anchor: Coord, id: ShipId, direction: Direction) -> Result<Vec<Coord>, BoardError> {
        let spec = self.config.ship(id).ok_or(BoardError::UnknownShip(id))?;
        if !self.config.is_valid(anchor) {
            return Err(BoardError::OutOfBounds(anchor));
        }
        let run: Vec<Coord> = (0..spec.length as i32)
            .map(|n| anchor.step(direction, n))
            .collect();
        if run.iter().any(|&c| !self.config.is_valid(c)) {
            return Err(BoardError::RunOutOfBounds);
        }
        Ok(run)
    }

    /// Put ship `id` on the grid. Nothing changes unless every cell of the
    /// run is in bounds and empty and the ship is not already placed.
    pub fn place_ship(
        &mut self,
        anchor: Coord,
        id: ShipId,
        direction: Direction,
    ) -> Result<(), BoardError> {
        if self.hits_on(id).is_some() {
            return Err(BoardError::AlreadyPlaced(id));
        }
        let run = self.run(anchor, id, direction)?;
        if let Some(&taken) = run.iter().find(|&&c| self.cells[c] != Cell::Empty) {
            return Err(BoardError::Occupied(taken));
        }
        for c in run {
            self.cells[c] = Cell::Ship(id);
        }
        self.ships.push(PlacedShip { id, hits: 0 });
        Ok(())
    }

    /// Exact inverse of [`Board::place_ship`] with the same arguments.
    pub fn unplace_ship(
        &mut self,
        anchor: Coord,
        id: ShipId,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let run = self.run(anchor, id, direction)?;
        if let Some(&other) = run.iter().find(|&&c| self.cells[c] != Cell::Ship(id)) {
            return Err(BoardError::WrongOccupant(other, id));
        }
        let slot = self
            .ships
            .iter()
            .position(|s| s.id == id)
            .ok_or(BoardError::NotPlaced(id))?;
        for c in run {
            self.cells[c] = Cell::Empty;
        }
        self.ships.remove(slot);
        Ok(())
    }

    /// Fire at `target`.
    pub fn attack(&mut self, target: Coord) -> Result<Shot, BoardError> {
        let cell = self
            .cells
            .get_mut(target)
            .ok_or(BoardError::OutOfBounds(target))?;
        let id = match *cell {
            Cell::Hit | Cell::Miss => return Err(BoardError::AlreadyAttacked(target)),
            Cell::Empty | Cell::Blocked => {
                *cell = Cell::Miss;
                return Ok(Shot::Miss);
            }
            Cell::Ship(id) => id,
        };
        *cell = Cell::Hit;
        let length = self.config.ship_length(id);
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(BoardError::NotPlaced(id))?;
        ship.hits += 1;
        if ship.hits == length {
            debug!("ship {id} destroyed at {target}");
            Ok(Shot::Destroyed(id))
        } else {
            Ok(Shot::Hit)
        }
    }

    /// True when every ship on the grid has taken as many hits as its length.
    pub fn all_ships_destroyed(&self) -> bool {
        self.ships
            .iter()
            .all(|s| s.hits == self.config.ship_length(s.id))
    }

    /// Marker printed for a cell.
    fn marker(&self, cell: Cell, shots_only: bool) -> char {
        match cell {
            Cell::Hit => 'X',
            Cell::Miss => 'o',
            _ if shots_only => '.',
            Cell::Empty => '.',
            Cell::Blocked => '-',
            Cell::Ship(id) => self.config.ship_symbol(id),
        }
    }

    /// Text picture of the grid. With `shots_only` every cell that is not a
    /// hit or a miss prints as `.`, hiding the ship layout.
    pub fn render(&self, shots_only: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, shots_only);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, shots_only: bool) -> fmt::Result {
        let dims = self.cells.dims();
        out.write_str("  ")?;
        for c in 0..dims.cols() {
            write!(out, "{c}")?;
        }
        out.write_char('\n')?;
        for r in 0..dims.rows() {
            write!(out, "{r} ")?;
            for c in 0..dims.cols() {
                let cell = self.cells[Coord::new(r as i32, c as i32)];
                out.write_char(self.marker(cell, shots_only))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, false)
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("cells", &format_args!("\n{}", self))
            .finish()
    }
}
