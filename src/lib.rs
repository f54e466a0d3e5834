//! Uniqueness-aware solver for daily grid puzzles
//!
//! Each cell of an N×N grid must be filled with a player satisfying both its row and
//! column criteria, and no player may be used twice. The solver finds either any valid
//! assignment or the rarest one (lowest total popularity) via branch-and-bound.

#![forbid(unsafe_code)]

/// Candidate indexing and the constrained assignment search
pub mod algorithm;
/// Input/output operations, error handling, and the command-line layer
pub mod io;
/// Puzzle structure: criteria, entities, and the grid model
pub mod puzzle;

pub use algorithm::solver::{SearchMode, SolveOutcome, Solution, solve};
pub use io::error::{Result, SolveError};
