//! Puzzle data structures
//!
//! This module contains the pieces a solve request is made of:
//! - Criteria attached to rows and columns
//! - Entities (players) with attributes and popularity weights
//! - The grid model deriving cells from row and column criteria

/// Closed set of selection criteria and their evaluation
pub mod criterion;
/// Player identity, attributes, and weight
pub mod entity;
/// Grid model and cell coordinates
pub mod grid;

pub use criterion::{Comparison, Criterion};
pub use entity::{Attributes, Entity, EntityId};
pub use grid::{Cell, CellCriterion, Grid};
