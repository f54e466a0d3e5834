//! Tests for the rayon-backed branch search

#[cfg(test)]
mod tests {
    use hoopgrid::SolveError;
    use hoopgrid::algorithm::candidates::CandidateIndex;
    use hoopgrid::algorithm::parallel::solve_parallel;
    use hoopgrid::algorithm::solver::{SearchMode, SolveOutcome, solve};
    use hoopgrid::algorithm::targets::TargetCells;
    use hoopgrid::puzzle::{Cell, Entity};

    /// Twelve players whose weights repeat, so many totals tie
    fn tied_pool() -> Vec<Entity> {
        (0..12u64)
            .map(|i| Entity::new(format!("p{i:02}"), format!("Player {i}"), 10 + (i % 4) * 5))
            .collect()
    }

    /// Player `i` is eligible for cell `c` when `(i + c) % 3 != 0`
    fn striped_index<'a>(pool: &'a [Entity], targets: &TargetCells) -> CandidateIndex<'a> {
        let result = CandidateIndex::from_eligibility(
            3,
            pool,
            targets,
            |cell, entity| {
                let position = pool.iter().position(|e| e.id == entity.id).unwrap_or(0);
                (position + cell.index(3)) % 3 != 0
            },
            |entity| entity.weight,
        );
        let Ok(index) = result else {
            unreachable!("every cell has eight candidates");
        };
        index
    }

    // Tests parallel optimisation returns exactly the sequential answer under ties
    // Verified by merging worker results in completion order
    #[test]
    fn test_min_weight_matches_sequential() {
        let pool = tied_pool();
        let targets = TargetCells::all(3);
        let index = striped_index(&pool, &targets);

        let sequential = solve(&index, &targets, SearchMode::MinWeight);
        let parallel = solve_parallel(&index, &targets, SearchMode::MinWeight);
        let (Ok(SolveOutcome::Solved(sequential)), Ok(SolveOutcome::Solved(parallel))) =
            (sequential, parallel)
        else {
            unreachable!("grid is solvable");
        };
        assert_eq!(parallel.total_weight(), sequential.total_weight());
        assert_eq!(parallel.placements(), sequential.placements());
    }

    // Tests workers agree with the sequential search when totals overflow u64
    // Verified by tightening the shared bound with a saturated total
    #[test]
    fn test_min_weight_beyond_u64_matches_sequential() {
        let half = u64::MAX / 2;
        let weights = [50, 2, half, half, u64::MAX - 40];
        let pool: Vec<Entity> = weights
            .iter()
            .enumerate()
            .map(|(i, &weight)| Entity::new(format!("p{i}"), format!("Player {i}"), weight))
            .collect();
        let eligible: [&[usize]; 3] = [&[0, 2], &[3, 0], &[4, 0, 3]];
        let Ok(targets) = TargetCells::from_indices(&[0, 1, 2], 2) else {
            unreachable!("cells exist");
        };
        let Ok(index) = CandidateIndex::from_eligibility(
            2,
            &pool,
            &targets,
            |cell, entity| {
                eligible.get(cell.index(2)).is_some_and(|allowed| {
                    allowed
                        .iter()
                        .any(|&i| pool.get(i).is_some_and(|e| e.id == entity.id))
                })
            },
            |entity| entity.weight,
        ) else {
            unreachable!("every target cell has candidates");
        };

        let sequential = solve(&index, &targets, SearchMode::MinWeight);
        let parallel = solve_parallel(&index, &targets, SearchMode::MinWeight);
        let (Ok(SolveOutcome::Solved(sequential)), Ok(SolveOutcome::Solved(parallel))) =
            (sequential, parallel)
        else {
            unreachable!("three cells are solvable");
        };
        assert_eq!(parallel.total_weight(), Some(u128::from(u64::MAX) + 49));
        assert_eq!(parallel.placements(), sequential.placements());
    }

    // Tests parallel feasibility keeps the earliest branch's assignment
    // Verified by returning whichever worker finished first
    #[test]
    fn test_first_feasible_matches_sequential() {
        let pool = tied_pool();
        let targets = TargetCells::all(3);
        let index = striped_index(&pool, &targets);

        for _ in 0..5 {
            let sequential = solve(&index, &targets, SearchMode::FirstFeasible);
            let parallel = solve_parallel(&index, &targets, SearchMode::FirstFeasible);
            let (Ok(SolveOutcome::Solved(sequential)), Ok(SolveOutcome::Solved(parallel))) =
                (sequential, parallel)
            else {
                unreachable!("grid is solvable");
            };
            assert_eq!(parallel.placements(), sequential.placements());
            assert_eq!(parallel.total_weight(), None);
        }
    }

    // Tests restricted targets are honoured by the workers
    // Verified by rooting branches at the first grid cell instead of the first target
    #[test]
    fn test_restricted_targets() {
        let pool = tied_pool();
        let Ok(targets) = TargetCells::from_indices(&[2, 6], 3) else {
            unreachable!("cells exist");
        };
        let index = striped_index(&pool, &targets);

        let Ok(SolveOutcome::Solved(solution)) =
            solve_parallel(&index, &targets, SearchMode::MinWeight)
        else {
            unreachable!("two cells are solvable");
        };
        assert_eq!(solution.len(), 2);
        assert!(solution.entity_at(Cell::new(0, 2)).is_some());
        assert!(solution.entity_at(Cell::new(2, 0)).is_some());
        assert!(solution.entity_at(Cell::new(1, 1)).is_none());
        assert_eq!(solution.total_weight(), Some(20));
    }

    // Tests exhaustion across all branches is reported as unsolvable
    // Verified by treating an empty merge as an error
    #[test]
    fn test_unsolvable_across_branches() {
        let pool: Vec<Entity> = (0..3u64)
            .map(|i| Entity::new(format!("p{i}"), format!("Player {i}"), i))
            .collect();
        let targets = TargetCells::all(2);
        let Ok(index) = CandidateIndex::from_eligibility(
            2,
            &pool,
            &targets,
            |_, _| true,
            |entity| entity.weight,
        ) else {
            unreachable!("every cell has candidates");
        };

        for mode in [SearchMode::FirstFeasible, SearchMode::MinWeight] {
            let outcome = solve_parallel(&index, &targets, mode);
            assert!(matches!(outcome, Ok(SolveOutcome::Unsolvable)));
        }
    }

    #[test]
    fn test_invalid_targets_propagate() {
        let pool = tied_pool();
        let targets = TargetCells::all(3);
        let index = striped_index(&pool, &targets);

        let result = solve_parallel(&index, &TargetCells::all(2), SearchMode::MinWeight);
        assert!(matches!(result, Err(SolveError::InvalidParameter { .. })));
    }
}
