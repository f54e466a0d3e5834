//! Uniqueness-aware assignment search
//!
//! Depth-first search over the target cells, most constrained cell first, trying each
//! cell's candidates lightest first and skipping entities already placed. In
//! [`SearchMode::MinWeight`] the search is a branch-and-bound: a branch is cut as soon
//! as its accumulated weight plus the lightest possible completion reaches the best
//! total found so far. Because candidates are sorted, the cut ends the whole level.

use crate::algorithm::bitset::EntityBitset;
use crate::algorithm::bound::{FirstHit, SharedBound};
use crate::algorithm::candidates::{Candidate, CandidateIndex};
use crate::algorithm::targets::TargetCells;
use crate::io::error::Result;
use crate::puzzle::entity::EntityId;
use crate::puzzle::grid::Cell;

/// What the search is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Stop at the first full assignment found
    ///
    /// Candidates are still tried lightest first, so the result tends to be light but
    /// carries no optimality guarantee.
    FirstFeasible,
    /// Return a full assignment of minimum total weight
    ///
    /// When several assignments share the minimum, the first one reached in traversal
    /// order is returned. The choice is deterministic for identical input but is not
    /// otherwise specified.
    MinWeight,
}

/// Counters describing how much of the search tree was visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (partial assignments visited)
    pub nodes: u64,
    /// Levels abandoned by the weight bound
    pub pruned: u64,
}

impl SearchStats {
    /// Combine counters from independent workers
    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            nodes: self.nodes + other.nodes,
            pruned: self.pruned + other.pruned,
        }
    }
}

/// One solved cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The solved cell
    pub cell: Cell,
    /// Identity of the placed entity
    pub entity: EntityId,
    /// Position of the placed entity in the pool
    pub pool_index: usize,
    /// Weight of the placed entity
    pub weight: u64,
}

/// Full assignment over the requested target cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
    total_weight: Option<u128>,
    stats: SearchStats,
}

impl Solution {
    /// Solved cells in row-major order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Entity placed in a cell, `None` for cells outside the targets
    pub fn entity_at(&self, cell: Cell) -> Option<&EntityId> {
        self.placements
            .iter()
            .find(|placement| placement.cell == cell)
            .map(|placement| &placement.entity)
    }

    /// Optimal total weight; only present for [`SearchMode::MinWeight`]
    pub const fn total_weight(&self) -> Option<u128> {
        self.total_weight
    }

    /// Sum of placed weights regardless of mode
    pub fn weight_sum(&self) -> u128 {
        self.placements
            .iter()
            .map(|placement| u128::from(placement.weight))
            .sum()
    }

    /// Search counters for the run that produced this solution
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of solved cells
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True if no cell was solved
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub(crate) fn from_choices(
        index: &CandidateIndex<'_>,
        plan: &SearchPlan,
        choices: &[Candidate],
        mode: SearchMode,
        stats: SearchStats,
    ) -> Self {
        let mut placements: Vec<Placement> = plan
            .order
            .iter()
            .zip(choices)
            .filter_map(|(&cell, candidate)| {
                index.entity(candidate.entity).map(|entity| Placement {
                    cell,
                    entity: entity.id.clone(),
                    pool_index: candidate.entity,
                    weight: candidate.weight,
                })
            })
            .collect();
        placements.sort_by_key(|placement| placement.cell);

        let mut solution = Self {
            placements,
            total_weight: None,
            stats,
        };
        if mode == SearchMode::MinWeight {
            solution.total_weight = Some(solution.weight_sum());
        }
        solution
    }
}

/// Result of an exhaustive search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// An assignment satisfying every target cell
    Solved(Solution),
    /// No injective assignment over the target cells exists
    Unsolvable,
}

impl SolveOutcome {
    /// The solution, if one was found
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Unsolvable => None,
        }
    }

    /// Whether the search proved the targets unsatisfiable
    pub const fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable)
    }
}

/// Visiting order and completion bounds for one request
#[derive(Debug, Clone)]
pub(crate) struct SearchPlan {
    /// Target cells, fewest candidates first, ties in row-major order
    pub(crate) order: Vec<Cell>,
    /// `floors[d]` is the sum of the lightest candidate weights of `order[d..]`
    floors: Vec<u128>,
}

impl SearchPlan {
    pub(crate) fn new(index: &CandidateIndex<'_>, targets: &TargetCells) -> Self {
        let mut order: Vec<Cell> = targets.iter().collect();
        order.sort_by_key(|&cell| (index.candidates(cell).len(), cell));

        let mut floors: Vec<u128> = vec![0; order.len() + 1];
        for depth in (0..order.len()).rev() {
            let lightest = order
                .get(depth)
                .and_then(|&cell| index.min_weight(cell))
                .unwrap_or(0);
            let below = floors.get(depth + 1).copied().unwrap_or(0);
            if let Some(floor) = floors.get_mut(depth) {
                *floor = below + u128::from(lightest);
            }
        }

        Self { order, floors }
    }

    /// Lightest conceivable weight of the cells from `depth` onwards
    pub(crate) fn floor(&self, depth: usize) -> u128 {
        self.floors.get(depth).copied().unwrap_or(0)
    }

    pub(crate) fn first_cell(&self) -> Option<Cell> {
        self.order.first().copied()
    }
}

/// How a search cooperates with sibling workers
#[derive(Clone, Copy)]
pub(crate) enum Coordination<'s> {
    /// Single sequential search
    Alone,
    /// Optimizing worker sharing the best total
    Bound(&'s SharedBound),
    /// Feasibility worker racing siblings for the earliest branch
    Race {
        /// Shared record of the earliest successful branch
        hits: &'s FirstHit,
        /// This worker's branch number
        branch: usize,
    },
}

/// Mutable search state owned by one worker
///
/// Weights are accumulated as `u128` so a sum of `u64` votes never wraps or saturates.
pub(crate) struct Search<'s, 'a> {
    index: &'s CandidateIndex<'a>,
    plan: &'s SearchPlan,
    mode: SearchMode,
    coordination: Coordination<'s>,
    used: EntityBitset,
    chosen: Vec<Candidate>,
    weight: u128,
    best: Option<(u128, Vec<Candidate>)>,
    stats: SearchStats,
}

impl<'s, 'a> Search<'s, 'a> {
    pub(crate) fn new(
        index: &'s CandidateIndex<'a>,
        plan: &'s SearchPlan,
        mode: SearchMode,
        coordination: Coordination<'s>,
    ) -> Self {
        Self {
            index,
            plan,
            mode,
            coordination,
            used: EntityBitset::new(index.pool_len()),
            chosen: Vec::with_capacity(plan.order.len()),
            weight: 0,
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Search the whole tree
    pub(crate) fn run(&mut self) {
        self.descend(0);
    }

    /// Search only the subtree below a fixed choice for the first cell
    pub(crate) fn run_from(&mut self, first: Candidate) {
        self.place(first);
        self.descend(1);
        self.unplace(first);
    }

    /// Best assignment found and the counters of this worker
    pub(crate) fn finish(self) -> (Option<(u128, Vec<Candidate>)>, SearchStats) {
        (self.best, self.stats)
    }

    /// Returns `true` when the whole search should stop
    fn descend(&mut self, depth: usize) -> bool {
        self.stats.nodes += 1;
        if self.abandoned(depth) {
            return matches!(self.coordination, Coordination::Race { .. });
        }

        let Some(&cell) = self.plan.order.get(depth) else {
            return self.record();
        };

        let completion = self.plan.floor(depth + 1);
        for &candidate in self.index.candidates(cell) {
            if self.used.contains(candidate.entity) {
                continue;
            }
            if self.mode == SearchMode::MinWeight {
                let reachable = self.weight + u128::from(candidate.weight) + completion;
                if self.dominated(reachable) {
                    // Later candidates are no lighter
                    self.stats.pruned += 1;
                    break;
                }
            }

            self.place(candidate);
            let stop = self.descend(depth + 1);
            self.unplace(candidate);
            if stop {
                return true;
            }
        }
        false
    }

    /// Re-check state shared with sibling workers before expanding a node
    fn abandoned(&self, depth: usize) -> bool {
        match self.coordination {
            Coordination::Alone => false,
            // Ties with the shared bound are kept so every worker still reports its
            // own first minimal assignment
            Coordination::Bound(shared) => exceeds(shared, self.weight + self.plan.floor(depth)),
            Coordination::Race { hits, branch } => hits.beaten(branch),
        }
    }

    fn dominated(&self, reachable: u128) -> bool {
        let local = self
            .best
            .as_ref()
            .is_some_and(|(best, _)| reachable >= *best);
        let shared = match self.coordination {
            Coordination::Bound(shared) => exceeds(shared, reachable),
            _ => false,
        };
        local || shared
    }

    fn record(&mut self) -> bool {
        match self.mode {
            SearchMode::FirstFeasible => {
                self.best = Some((self.weight, self.chosen.clone()));
                if let Coordination::Race { hits, branch } = self.coordination {
                    hits.record(branch);
                }
                true
            }
            SearchMode::MinWeight => {
                let improves = self
                    .best
                    .as_ref()
                    .is_none_or(|(best, _)| self.weight < *best);
                if improves {
                    self.best = Some((self.weight, self.chosen.clone()));
                    if let Coordination::Bound(shared) = self.coordination {
                        // Totals beyond u64 leave the bound unset; local pruning still applies
                        shared.tighten(u64::try_from(self.weight).unwrap_or(u64::MAX));
                    }
                }
                false
            }
        }
    }

    fn place(&mut self, candidate: Candidate) {
        self.used.insert(candidate.entity);
        self.chosen.push(candidate);
        self.weight += u128::from(candidate.weight);
    }

    fn unplace(&mut self, candidate: Candidate) {
        self.used.remove(candidate.entity);
        self.chosen.pop();
        self.weight -= u128::from(candidate.weight);
    }
}

/// Whether `weight` is strictly above a bound some worker has already reached
fn exceeds(shared: &SharedBound, weight: u128) -> bool {
    shared.is_set() && weight > u128::from(shared.get())
}

/// Fill the target cells with distinct eligible entities
///
/// # Errors
///
/// Returns an error if the targets belong to a different grid size or a target cell
/// has no candidates. An exhaustive search without result is reported as
/// [`SolveOutcome::Unsolvable`], not as an error.
pub fn solve(
    index: &CandidateIndex<'_>,
    targets: &TargetCells,
    mode: SearchMode,
) -> Result<SolveOutcome> {
    index.ensure_populated(targets)?;
    let plan = SearchPlan::new(index, targets);

    let mut search = Search::new(index, &plan, mode, Coordination::Alone);
    search.run();
    let (best, stats) = search.finish();

    Ok(match best {
        Some((_, choices)) => {
            SolveOutcome::Solved(Solution::from_choices(index, &plan, &choices, mode, stats))
        }
        None => SolveOutcome::Unsolvable,
    })
}
