//! Text report of a solved grid
//!
//! The report starts with the chosen answers and is followed by every cell's full
//! candidate list, rarest first and alphabetical within equal votes, so alternatives
//! can be looked up by hand.

use crate::algorithm::candidates::CandidateIndex;
use crate::algorithm::solver::SolveOutcome;
use crate::io::configuration::{
    OUTPUT_EXTENSION, OUTPUT_PREFIX, RESULTS_SEPARATOR, SECTION_SEPARATOR,
};
use crate::puzzle::grid::{Cell, Grid};
use std::path::{Path, PathBuf};

/// Render the full report for one solve request
pub fn render_report(
    date: &str,
    grid: &Grid,
    index: &CandidateIndex<'_>,
    outcome: &SolveOutcome,
) -> String {
    let mut report = format!("Results for {date}:\n\n");
    report.push_str(&render_solution(grid, index, outcome));
    report.push_str(&format!("\n{RESULTS_SEPARATOR}\n\nSorted by votes:\n\n"));
    for cell in grid.cells() {
        report.push_str(&render_candidates(grid, index, cell));
    }
    report
}

/// Render the chosen answer for each solved cell
pub fn render_solution(grid: &Grid, index: &CandidateIndex<'_>, outcome: &SolveOutcome) -> String {
    let Some(solution) = outcome.solution() else {
        return "No valid assignment exists.\n".to_string();
    };

    let mut section = String::from("Solution:\n\n");
    for placement in solution.placements() {
        let name = index
            .entity(placement.pool_index)
            .map_or_else(|| placement.entity.to_string(), |entity| entity.display_name());
        section.push_str(&format!(
            "Cell {} ({}): {name} ({})\n",
            placement.cell,
            describe_cell(grid, placement.cell),
            placement.weight
        ));
    }

    if let Some(total) = solution.total_weight() {
        section.push_str(&format!("\nTotal votes: {total}\n"));
    }
    section
}

fn render_candidates(grid: &Grid, index: &CandidateIndex<'_>, cell: Cell) -> String {
    let mut section = format!("Cell {cell} ({}):\n\n", describe_cell(grid, cell));
    let mut listed: Vec<(u64, String)> = index
        .candidates(cell)
        .iter()
        .filter_map(|candidate| {
            index
                .entity(candidate.entity)
                .map(|entity| (candidate.weight, entity.display_name()))
        })
        .collect();
    listed.sort();
    let lines: Vec<String> = listed
        .into_iter()
        .map(|(weight, name)| format!("{name} - {weight}"))
        .collect();
    section.push_str(&lines.join("\n"));
    section.push_str(&format!("\n\n{SECTION_SEPARATOR}\n\n"));
    section
}

fn describe_cell(grid: &Grid, cell: Cell) -> String {
    grid.cell_criterion(cell)
        .map_or_else(String::new, |criterion| {
            format!("{} & {}", criterion.row, criterion.column)
        })
}

/// Report file location for a grid date inside `dir`
pub fn output_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("{OUTPUT_PREFIX}{date}.{OUTPUT_EXTENSION}"))
}
