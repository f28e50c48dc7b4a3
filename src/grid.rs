//! Rectangular cell storage sized at construction time.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::common::Coord;
use crate::config::Dimensions;

/// Row-major grid of `T`, one entry per cell of `dims`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dims: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid with every cell set to `value`.
    pub fn new(dims: Dimensions, value: T) -> Self {
        Self {
            dims,
            cells: vec![value; dims.cell_count()],
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.dims.index(coord).and_then(|i| self.cells.get(i))
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        let index = self.dims.index(coord)?;
        self.cells.get_mut(index)
    }

    /// Cells paired with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dims.coord_at(i), cell))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        match self.get(coord) {
            Some(cell) => cell,
            None => panic!("{coord} is out of bounds for {:?}", self.dims),
        }
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let dims = self.dims;
        match self.get_mut(coord) {
            Some(cell) => cell,
            None => panic!("{coord} is out of bounds for {dims:?}"),
        }
    }
}
