/// Bitset over the entity pool for the uniqueness constraint
pub mod bitset;
/// Shared best-bound and first-hit values for parallel workers
pub mod bound;
/// Per-cell candidate lists ordered by weight
pub mod candidates;
/// Parallel top-level branching over the most constrained cell
pub mod parallel;
/// Depth-first assignment search with branch-and-bound
pub mod solver;
/// Caller-selected subsets of cells to solve
pub mod targets;
