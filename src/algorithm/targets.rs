use crate::io::error::{Result, invalid_parameter};
use crate::puzzle::grid::Cell;
use std::collections::BTreeSet;

/// Set of cells a solve request should fill
///
/// Cells outside the set are left unassigned and impose no uniqueness exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCells {
    cells: BTreeSet<Cell>,
    size: usize,
}

impl TargetCells {
    /// Every cell of a grid with side length `size`
    pub fn all(size: usize) -> Self {
        let cells = (0..size * size)
            .filter_map(|index| Cell::from_index(index, size))
            .collect();
        Self { cells, size }
    }

    /// Cells given by row-major numbers, e.g. `[0, 8]` for opposite corners of a 3×3 grid
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidParameter` if the list is empty or a number lies
    /// outside the grid
    pub fn from_indices(indices: &[usize], size: usize) -> Result<Self> {
        let cells = indices
            .iter()
            .map(|&index| {
                Cell::from_index(index, size).ok_or_else(|| {
                    invalid_parameter(
                        "cells",
                        &index,
                        &format!("cell numbers must be below {}", size * size),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(cells, size)
    }

    /// Cells given by coordinates
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidParameter` if no cell is given or a cell lies
    /// outside the grid
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, size: usize) -> Result<Self> {
        let cells: BTreeSet<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(invalid_parameter(
                "cells",
                &"",
                &"at least one target cell is required",
            ));
        }
        if let Some(outside) = cells.iter().find(|cell| !cell.within(size)) {
            return Err(invalid_parameter(
                "cells",
                outside,
                &format!("grid is {size}x{size}"),
            ));
        }
        Ok(Self { cells, size })
    }

    /// Side length of the grid these targets belong to
    pub const fn grid_size(&self) -> usize {
        self.size
    }

    /// Check membership
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of target cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is targeted
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether every cell of the grid is targeted
    pub fn is_full_grid(&self) -> bool {
        self.cells.len() == self.size * self.size
    }

    /// Target cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
