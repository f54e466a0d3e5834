//! Per-cell candidate lists built once per solve request
//!
//! Candidates are stored lightest first with ties ordered by entity id, which is the
//! order the solver tries them in.

use crate::algorithm::targets::TargetCells;
use crate::io::error::{Result, SolveError, invalid_parameter};
use crate::puzzle::criterion::Criterion;
use crate::puzzle::entity::{Entity, EntityId};
use crate::puzzle::grid::{Cell, Grid};
use ndarray::Array2;
use std::collections::HashSet;

/// Eligible entity for a cell, referenced by its position in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Index into the entity pool
    pub entity: usize,
    /// Popularity weight used by the optimizing search
    pub weight: u64,
}

/// Read-only mapping from each cell to its eligible entities
#[derive(Debug, Clone)]
pub struct CandidateIndex<'a> {
    pool: &'a [Entity],
    cells: Array2<Vec<Candidate>>,
}

impl<'a> CandidateIndex<'a> {
    /// Filter the pool into per-cell candidate lists
    ///
    /// An entity is a candidate for a cell iff `evaluate` accepts it for both the row
    /// and the column criterion. Lists are sorted by ascending weight, ties broken by
    /// ascending entity id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two pool entries share an id (`SolveError::InvalidParameter`)
    /// - A target cell ends up with no candidates (`SolveError::EmptyCell`, first such
    ///   cell in row-major order)
    pub fn build<E, W>(
        grid: &Grid,
        pool: &'a [Entity],
        targets: &TargetCells,
        evaluate: E,
        weight_of: W,
    ) -> Result<Self>
    where
        E: Fn(&Criterion, &Entity) -> bool,
        W: Fn(&Entity) -> u64,
    {
        Self::from_eligibility(
            grid.size(),
            pool,
            targets,
            |cell, entity| {
                grid.cell_criterion(cell)
                    .is_some_and(|criterion| criterion.holds_with(entity, &evaluate))
            },
            weight_of,
        )
    }

    /// Build from a per-cell eligibility test instead of row and column criteria
    ///
    /// Used when a puzzle source ships precomputed eligibility for every cell.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateIndex::build`]
    pub fn from_eligibility<P, W>(
        size: usize,
        pool: &'a [Entity],
        targets: &TargetCells,
        eligible: P,
        weight_of: W,
    ) -> Result<Self>
    where
        P: Fn(Cell, &Entity) -> bool,
        W: Fn(&Entity) -> u64,
    {
        let mut seen: HashSet<&EntityId> = HashSet::with_capacity(pool.len());
        if let Some(duplicate) = pool.iter().find(|entity| !seen.insert(&entity.id)) {
            return Err(invalid_parameter(
                "pool",
                &duplicate.id,
                &"entity ids must be unique",
            ));
        }

        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            let cell = Cell::new(row, col);
            let mut matching: Vec<(u64, &EntityId, usize)> = pool
                .iter()
                .enumerate()
                .filter(|&(_, entity)| eligible(cell, entity))
                .map(|(index, entity)| (weight_of(entity), &entity.id, index))
                .collect();
            matching.sort_unstable();
            matching
                .into_iter()
                .map(|(weight, _, entity)| Candidate { entity, weight })
                .collect()
        });

        let index = Self { pool, cells };
        index.ensure_populated(targets)?;
        Ok(index)
    }

    /// Build with the built-in criterion evaluation and each entity's own weight
    ///
    /// # Errors
    ///
    /// Same as [`CandidateIndex::build`]
    pub fn from_pool(grid: &Grid, pool: &'a [Entity], targets: &TargetCells) -> Result<Self> {
        Self::build(grid, pool, targets, Criterion::matches, |entity| entity.weight)
    }

    /// Verify every target cell has at least one candidate
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidParameter` if the targets describe a different grid
    /// size, or `SolveError::EmptyCell` for the first empty target in row-major order
    pub fn ensure_populated(&self, targets: &TargetCells) -> Result<()> {
        if targets.grid_size() != self.size() {
            return Err(invalid_parameter(
                "cells",
                &targets.grid_size(),
                &format!("targets were built for a different grid (size {})", self.size()),
            ));
        }
        match targets.iter().find(|&cell| self.candidates(cell).is_empty()) {
            Some(cell) => Err(SolveError::EmptyCell { cell }),
            None => Ok(()),
        }
    }

    /// Candidates for a cell, lightest first; empty outside the grid
    pub fn candidates(&self, cell: Cell) -> &[Candidate] {
        self.cells
            .get([cell.row, cell.col])
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Weight of the lightest candidate for a cell
    pub fn min_weight(&self, cell: Cell) -> Option<u64> {
        self.candidates(cell).first().map(|candidate| candidate.weight)
    }

    /// Entity at a pool position
    pub fn entity(&self, entity: usize) -> Option<&'a Entity> {
        self.pool.get(entity)
    }

    /// Number of entities in the pool
    pub const fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Side length of the indexed grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }
}
