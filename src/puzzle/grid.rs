//! Grid model deriving N² cells from row and column criteria
//!
//! Cells are never stored; they are coordinates whose effective criterion is the
//! conjunction of the criteria on their row and column.

use crate::io::error::{Result, SolveError};
use crate::puzzle::criterion::Criterion;
use crate::puzzle::entity::Entity;
use std::fmt;

/// Cell coordinates within a grid
///
/// Ordering is row-major, matching the `row * size + col` numbering used on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a cell from coordinates
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decode a row-major cell number for a grid of the given size
    pub const fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// Row-major cell number for a grid of the given size
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Check whether the cell lies inside a grid of the given size
    pub const fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Conjunction of a row criterion and a column criterion
#[derive(Debug, Clone, Copy)]
pub struct CellCriterion<'a> {
    /// Criterion attached to the cell's row
    pub row: &'a Criterion,
    /// Criterion attached to the cell's column
    pub column: &'a Criterion,
}

impl CellCriterion<'_> {
    /// Both criteria hold for the entity under the given evaluator
    pub fn holds_with<F>(&self, entity: &Entity, evaluate: F) -> bool
    where
        F: Fn(&Criterion, &Entity) -> bool,
    {
        evaluate(self.row, entity) && evaluate(self.column, entity)
    }

    /// Both criteria hold for the entity under the built-in evaluation
    pub fn matches(&self, entity: &Entity) -> bool {
        self.holds_with(entity, Criterion::matches)
    }
}

/// Square puzzle defined by ordered row and column criteria
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Criterion>,
    columns: Vec<Criterion>,
}

impl Grid {
    /// Build a grid from row and column criteria
    ///
    /// # Errors
    ///
    /// Returns `SolveError::MalformedGrid` if either sequence is empty or the two
    /// sequences differ in length
    pub fn build(rows: Vec<Criterion>, columns: Vec<Criterion>) -> Result<Self> {
        if rows.is_empty() || columns.is_empty() || rows.len() != columns.len() {
            return Err(SolveError::MalformedGrid {
                rows: rows.len(),
                columns: columns.len(),
            });
        }
        Ok(Self { rows, columns })
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells (N²)
    pub const fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    /// Row criteria in order
    pub fn rows(&self) -> &[Criterion] {
        &self.rows
    }

    /// Column criteria in order
    pub fn columns(&self) -> &[Criterion] {
        &self.columns
    }

    /// Conjunction descriptor for a cell, or `None` outside the grid
    pub fn cell_criterion(&self, cell: Cell) -> Option<CellCriterion<'_>> {
        Some(CellCriterion {
            row: self.rows.get(cell.row)?,
            column: self.columns.get(cell.col)?,
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size();
        (0..size * size).map(move |index| Cell::new(index / size, index % size))
    }
}
