//! Parallel exploration of the top-level branches
//!
//! Each candidate of the most constrained cell roots an independent subtree searched
//! by its own worker with its own state. Optimizing workers share the best total found
//! so far; feasibility workers share the earliest branch that succeeded. Results are
//! merged in branch order, so the answer is identical to the sequential search.

use crate::algorithm::bound::{FirstHit, SharedBound};
use crate::algorithm::candidates::{Candidate, CandidateIndex};
use crate::algorithm::solver::{
    Coordination, Search, SearchMode, SearchPlan, SearchStats, SolveOutcome, Solution,
};
use crate::algorithm::targets::TargetCells;
use crate::io::error::Result;
use rayon::prelude::*;

type BranchResult = (usize, Option<(u128, Vec<Candidate>)>, SearchStats);

/// Same contract as [`crate::algorithm::solver::solve`], using the rayon thread pool
///
/// # Errors
///
/// Returns an error if the targets belong to a different grid size or a target cell
/// has no candidates
pub fn solve_parallel(
    index: &CandidateIndex<'_>,
    targets: &TargetCells,
    mode: SearchMode,
) -> Result<SolveOutcome> {
    index.ensure_populated(targets)?;
    let plan = SearchPlan::new(index, targets);
    let Some(first) = plan.first_cell() else {
        return Ok(SolveOutcome::Unsolvable);
    };

    let shared = SharedBound::new();
    let hits = FirstHit::new();

    let results: Vec<BranchResult> = index
        .candidates(first)
        .par_iter()
        .enumerate()
        .map(|(branch, &candidate)| {
            let coordination = match mode {
                SearchMode::MinWeight => Coordination::Bound(&shared),
                SearchMode::FirstFeasible => Coordination::Race {
                    hits: &hits,
                    branch,
                },
            };
            let mut search = Search::new(index, &plan, mode, coordination);
            search.run_from(candidate);
            let (best, stats) = search.finish();
            (branch, best, stats)
        })
        .collect();

    let stats = results
        .iter()
        .fold(SearchStats::default(), |total, (_, _, stats)| {
            total.merged(*stats)
        });

    let mut found = results
        .into_iter()
        .filter_map(|(branch, best, _)| best.map(|(weight, choices)| (branch, weight, choices)));
    let winner = match mode {
        SearchMode::FirstFeasible => {
            let earliest = hits.lowest();
            found.find(|(branch, _, _)| Some(*branch) == earliest)
        }
        SearchMode::MinWeight => found.min_by_key(|(branch, weight, _)| (*weight, *branch)),
    };

    Ok(match winner {
        Some((_, _, choices)) => {
            SolveOutcome::Solved(Solution::from_choices(index, &plan, &choices, mode, stats))
        }
        None => SolveOutcome::Unsolvable,
    })
}
