//! Command-line interface for solving a day's grid from a puzzle directory

use crate::algorithm::candidates::CandidateIndex;
use crate::algorithm::parallel::solve_parallel;
use crate::algorithm::solver::{SearchMode, SolveOutcome, solve};
use crate::algorithm::targets::TargetCells;
use crate::io::configuration::DEFAULT_DATE;
use crate::io::error::{Result, WithPath};
use crate::io::progress::SolveSpinner;
use crate::io::report::{output_path, render_report};
use crate::io::schedule::{day_code, format_date, resolve_date};
use crate::io::source::{DirectorySource, PuzzleSource};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hoopgrid")]
#[command(
    author,
    version,
    about = "Solve the daily basketball grid, optionally with the rarest answers"
)]
/// Command-line arguments for the grid solver
pub struct Cli {
    /// Grid date as dd-mm-yyyy, or "today" for the newest published grid
    #[arg(value_name = "DATE", default_value = DEFAULT_DATE)]
    pub date: String,

    /// Directory holding puzzle definitions named grid_<day code>.json
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub puzzles: PathBuf,

    /// Minimize total votes instead of stopping at the first valid grid
    #[arg(short, long)]
    pub optimize: bool,

    /// Solve only these cells, numbered row by row from 0 (e.g. 0,8)
    #[arg(short, long, value_delimiter = ',', value_name = "CELLS")]
    pub cells: Vec<usize>,

    /// Search top-level branches on all cores
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Directory the report is written to
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Search mode selected by `--optimize`
    pub const fn mode(&self) -> SearchMode {
        if self.optimize {
            SearchMode::MinWeight
        } else {
            SearchMode::FirstFeasible
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter derived from `--quiet` and `-v` repetitions
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Target cells for a grid of the given size; every cell when `--cells` is absent
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidParameter` if a cell number lies outside the grid
    pub fn targets(&self, size: usize) -> Result<TargetCells> {
        if self.cells.is_empty() {
            Ok(TargetCells::all(size))
        } else {
            TargetCells::from_indices(&self.cells, size)
        }
    }
}

/// Orchestrates one solve request from date argument to report file
pub struct GridProcessor {
    cli: Cli,
    spinner: SolveSpinner,
}

impl GridProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let spinner = SolveSpinner::new(cli.should_show_progress());
        Self { cli, spinner }
    }

    /// Solve the requested grid relative to the local calendar date
    ///
    /// # Errors
    ///
    /// Returns an error if the date, puzzle file, grid, or cell selection is invalid,
    /// or the report cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.process_on(Local::now().date_naive()).map(|_| ())
    }

    /// Solve the requested grid with `today` as the current date
    ///
    /// Returns the path of the written report.
    ///
    /// # Errors
    ///
    /// Returns an error if the date, puzzle file, grid, or cell selection is invalid,
    /// or the report cannot be written
    // Allow print for the final summary line
    #[allow(clippy::print_stderr)]
    pub fn process_on(&mut self, today: NaiveDate) -> Result<PathBuf> {
        let result = self.run(today);
        self.spinner.finish();

        let (path, outcome) = result?;
        if !self.cli.quiet {
            match outcome.solution() {
                Some(solution) => eprintln!(
                    "Solved {} cells ({} votes), report written to {}",
                    solution.len(),
                    solution.weight_sum(),
                    path.display()
                ),
                None => eprintln!("No valid grid exists, report written to {}", path.display()),
            }
        }
        Ok(path)
    }

    fn run(&self, today: NaiveDate) -> Result<(PathBuf, SolveOutcome)> {
        let date = resolve_date(&self.cli.date, today)?;
        let label = format_date(date);
        let code = day_code(date)?;
        info!("requested grid date {label} (day code {code})");
        self.spinner.set_grid(&label);

        self.spinner.stage("loading puzzle");
        let source = DirectorySource::new(&self.cli.puzzles);
        let (grid, pool) = source.load(code)?.into_parts()?;
        let targets = self.cli.targets(grid.size())?;
        if targets.is_full_grid() {
            info!("solving all {} cells", grid.cell_count());
        } else {
            info!("solving {} of {} cells", targets.len(), grid.cell_count());
        }

        self.spinner.stage("indexing candidates");
        let index = CandidateIndex::from_pool(&grid, &pool, &targets)?;
        for cell in targets.iter() {
            debug!("cell {cell}: {} candidates", index.candidates(cell).len());
        }

        self.spinner.stage("searching");
        let mode = self.cli.mode();
        let outcome = if self.cli.parallel {
            solve_parallel(&index, &targets, mode)?
        } else {
            solve(&index, &targets, mode)?
        };
        match outcome.solution() {
            Some(solution) => info!(
                "solved {} cells after {} nodes ({} cuts)",
                solution.len(),
                solution.stats().nodes,
                solution.stats().pruned
            ),
            None => warn!("no injective assignment exists for grid {label}"),
        }

        let report = render_report(&label, &grid, &index, &outcome);
        let path = output_path(&self.cli.output_dir, &label);
        fs::write(&path, report).with_path(&path, "write report")?;
        Ok((path, outcome))
    }
}
