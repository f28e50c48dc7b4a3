//! Grid dimensions and fleet configuration.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;
use thiserror::Error;

use crate::common::{Coord, ShipId};

pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

/// The classic fleet: (name, length, symbol).
pub const STANDARD_FLEET: [(&str, usize, char); 5] = [
    ("aircraft carrier", 5, 'A'),
    ("battleship", 4, 'B'),
    ("destroyer", 3, 'D'),
    ("submarine", 3, 'S'),
    ("patrol boat", 2, 'P'),
];

/// Markers reserved by the board display.
const RESERVED_SYMBOLS: [char; 3] = ['X', '.', 'o'];

/// Errors raised while building a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("number of rows must be >= 1 and <= {max}, got {0}", max = MAX_ROWS)]
    BadRows(usize),
    #[error("number of columns must be >= 1 and <= {max}, got {0}", max = MAX_COLS)]
    BadCols(usize),
    #[error("bad ship length {0}; it must be >= 1")]
    ZeroLength(usize),
    #[error("bad ship length {0}; it won't fit on the board")]
    TooLong(usize),
    #[error("unprintable character {0:?} must not be used as a ship symbol")]
    Unprintable(char),
    #[error("character {0} must not be used as a ship symbol")]
    ReservedSymbol(char),
    #[error("ship symbol {0} must not be used for more than one ship")]
    DuplicateSymbol(char),
    #[error("board is too small to fit all ships")]
    BoardTooSmall,
    #[cfg(feature = "std")]
    #[error("invalid fleet file: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "std")]
    #[error("could not read fleet file: {0}")]
    Io(#[from] std::io::Error),
}

/// Size of a grid. Fixed for the life of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || rows > MAX_ROWS {
            return Err(ConfigError::BadRows(rows));
        }
        if cols == 0 || cols > MAX_COLS {
            return Err(ConfigError::BadCols(cols));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_valid(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Row-major position of `coord`, or `None` when it lies outside.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Inverse of [`Dimensions::index`].
    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).map(move |i| self.coord_at(i))
    }

    /// Uniformly random valid coordinate.
    pub fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        Coord::new(
            rng.random_range(0..self.rows) as i32,
            rng.random_range(0..self.cols) as i32,
        )
    }
}

/// One entry of the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub length: usize,
    pub symbol: char,
    pub name: String,
}

/// Grid dimensions plus the ordered fleet shared by both boards.
///
/// Boards and players borrow the configuration, so it cannot change once
/// any of them has been built.
#[derive(Debug, Clone)]
pub struct GameConfig {
    dims: Dimensions,
    ships: Vec<ShipSpec>,
}

impl GameConfig {
    /// Empty fleet on a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            dims: Dimensions::new(rows, cols)?,
            ships: Vec::new(),
        })
    }

    /// The five-ship classic fleet on a `rows` x `cols` grid.
    pub fn standard(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut config = Self::new(rows, cols)?;
        for (name, length, symbol) in STANDARD_FLEET {
            config.add_ship(length, symbol, name)?;
        }
        Ok(config)
    }

    /// Append a ship to the fleet, returning its id.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<ShipId, ConfigError> {
        if length < 1 {
            return Err(ConfigError::ZeroLength(length));
        }
        if length > self.rows() && length > self.cols() {
            return Err(ConfigError::TooLong(length));
        }
        if !symbol.is_ascii() || symbol.is_ascii_control() {
            return Err(ConfigError::Unprintable(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        let total: usize = self.ships.iter().map(|s| s.length).sum();
        if total + length > self.dims.cell_count() {
            return Err(ConfigError::BoardTooSmall);
        }
        self.ships.push(ShipSpec {
            length,
            symbol,
            name: name.into(),
        });
        Ok(self.ships.len() - 1)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn is_valid(&self, coord: Coord) -> bool {
        self.dims.is_valid(coord)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&ShipSpec> {
        self.ships.get(id)
    }

    /// Length of ship `id`. Panics if `id` is not in the fleet.
    pub fn ship_length(&self, id: ShipId) -> usize {
        self.ships[id].length
    }

    /// Symbol of ship `id`. Panics if `id` is not in the fleet.
    pub fn ship_symbol(&self, id: ShipId) -> char {
        self.ships[id].symbol
    }

    /// Name of ship `id`. Panics if `id` is not in the fleet.
    pub fn ship_name(&self, id: ShipId) -> &str {
        &self.ships[id].name
    }
}

/// On-disk fleet description.
#[cfg(feature = "std")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FleetFile {
    pub rows: usize,
    pub cols: usize,
    pub ships: Vec<ShipSpec>,
}

#[cfg(feature = "std")]
impl TryFrom<FleetFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: FleetFile) -> Result<Self, Self::Error> {
        let mut config = GameConfig::new(file.rows, file.cols)?;
        for spec in file.ships {
            config.add_ship(spec.length, spec.symbol, spec.name)?;
        }
        Ok(config)
    }
}

#[cfg(feature = "std")]
impl From<&GameConfig> for FleetFile {
    fn from(config: &GameConfig) -> Self {
        FleetFile {
            rows: config.rows(),
            cols: config.cols(),
            ships: config.ships.clone(),
        }
    }
}

#[cfg(feature = "std")]
impl GameConfig {
    /// Parse and validate a JSON fleet description.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: FleetFile = serde_json::from_str(text)?;
        file.try_into()
    }

    /// Read a JSON fleet description from disk.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
