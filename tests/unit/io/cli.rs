//! Tests for command-line parsing and end-to-end grid processing

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::Parser;
    use hoopgrid::SolveError;
    use hoopgrid::algorithm::solver::SearchMode;
    use hoopgrid::io::cli::{Cli, GridProcessor};
    use hoopgrid::puzzle::Cell;
    use log::LevelFilter;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PUZZLE: &str = r#"{
        "rows": [{"kind": "team", "code": "LAL"}, {"kind": "team", "code": "MIA"}],
        "columns": [
            {"kind": "award", "name": "MVP"},
            {"kind": "stat", "stat": "ppg", "comparison": "at_least", "value": 20.0}
        ],
        "players": [
            {"id": "lebron", "name": "LeBron James", "teams": ["LAL", "MIA"],
             "awards": ["MVP"], "stats": {"ppg": 27.1}, "votes": 900},
            {"id": "wade", "name": "Dwyane Wade", "teams": ["MIA"],
             "stats": {"ppg": 22.0}, "votes": 300},
            {"id": "kobe", "name": "Kobe Bryant", "teams": ["LAL"],
             "awards": ["MVP"], "stats": {"ppg": 25.0}, "votes": 300},
            {"id": "fisher", "name": "Derek Fisher", "teams": ["LAL"],
             "stats": {"ppg": 8.3}, "votes": 20},
            {"id": "shaq", "name": "Shaquille O'Neal", "teams": ["LAL", "MIA"],
             "awards": ["MVP"], "stats": {"ppg": 23.7}, "votes": 500}
        ]
    }"#;

    /// 2023-07-06, so "today" resolves to the grid with day code 1
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 6).expect("valid date")
    }

    fn puzzle_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("grid_1.json"), PUZZLE).expect("Failed to write puzzle");
        dir
    }

    fn cli_for(dir: &Path, extra: &[&str]) -> Cli {
        let root = dir.to_string_lossy().to_string();
        let mut args = vec![
            "program".to_string(),
            "--quiet".to_string(),
            "-p".to_string(),
            root.clone(),
            "-d".to_string(),
            root,
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.date, "today");
        assert_eq!(cli.puzzles, PathBuf::from("."));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.cells.is_empty());
        assert!(!cli.optimize);
        assert!(!cli.parallel);
        assert_eq!(cli.mode(), SearchMode::FirstFeasible);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "04-07-2023",
            "--puzzles",
            "grids",
            "--optimize",
            "--cells",
            "0,4,8",
            "--parallel",
            "--output-dir",
            "out",
            "--quiet",
        ]);

        assert_eq!(cli.date, "04-07-2023");
        assert_eq!(cli.puzzles, PathBuf::from("grids"));
        assert_eq!(cli.cells, vec![0, 4, 8]);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(cli.parallel);
        assert_eq!(cli.mode(), SearchMode::MinWeight);
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing (-o, -c, -j, -d)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-o", "-c", "2", "-j", "-d", "reports"]);

        assert!(cli.optimize);
        assert_eq!(cli.cells, vec![2]);
        assert!(cli.parallel);
        assert_eq!(cli.output_dir, PathBuf::from("reports"));
    }

    // Tests verbosity maps onto log levels and quiet overrides it
    // Verified by ignoring the quiet flag in log_level
    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(Cli::parse_from(["program"]).log_level(), LevelFilter::Warn);
        assert_eq!(Cli::parse_from(["program", "-v"]).log_level(), LevelFilter::Info);
        assert_eq!(Cli::parse_from(["program", "-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(Cli::parse_from(["program", "-vvvv"]).log_level(), LevelFilter::Trace);
        assert_eq!(
            Cli::parse_from(["program", "-vv", "-q"]).log_level(),
            LevelFilter::Error
        );
    }

    // Tests cell numbers are turned into targets for the loaded grid size
    // Verified by ignoring the --cells list
    #[test]
    fn test_targets_from_cells() {
        let all = Cli::parse_from(["program"]).targets(3).expect("full grid");
        assert!(all.is_full_grid());

        let some = Cli::parse_from(["program", "-c", "1,3"])
            .targets(2)
            .expect("cells in range");
        assert_eq!(some.len(), 2);
        assert!(some.contains(Cell::new(0, 1)));
        assert!(some.contains(Cell::new(1, 1)));

        let outside = Cli::parse_from(["program", "-c", "4"]).targets(2);
        assert!(outside.is_err());
    }

    // Tests a full run writes the optimized report for yesterday's grid
    // Verified by resolving "today" to the current date
    #[test]
    fn test_process_writes_report() {
        let dir = puzzle_dir();
        let mut processor = GridProcessor::new(cli_for(dir.path(), &["--optimize"]));

        let path = processor.process_on(today()).expect("Failed to process grid");
        assert_eq!(path, dir.path().join("hoopgrids_solved_05-07-2023.txt"));

        let report = fs::read_to_string(&path).expect("Failed to read report");
        assert!(report.starts_with("Results for 05-07-2023:"));
        assert!(report.contains("Cell 1-1 (team MIA & ppg >= 20): Dwyane Wade (300)"));
        assert!(report.contains("Total votes: 2000"));
        assert!(report.contains("Sorted by votes:"));
    }

    // Tests the parallel path and restricted cells through the processor
    // Verified by ignoring --cells when solving
    #[test]
    fn test_process_restricted_parallel() {
        let dir = puzzle_dir();
        let mut processor = GridProcessor::new(cli_for(
            dir.path(),
            &["05-07-2023", "--cells", "0", "--parallel"],
        ));

        let path = processor.process_on(today()).expect("Failed to process grid");
        let report = fs::read_to_string(path).expect("Failed to read report");
        assert!(report.contains("Cell 0-0 (team LAL & award MVP): Kobe Bryant (300)"));
        assert!(!report.contains("Cell 1-1 (team MIA & ppg >= 20): "));
        assert!(!report.contains("Total votes"));
    }

    // Tests a missing puzzle file is reported with its path
    // Verified by swallowing read errors
    #[test]
    fn test_process_missing_puzzle() {
        let dir = puzzle_dir();
        let mut processor = GridProcessor::new(cli_for(dir.path(), &["10-07-2023"]));

        match processor.process_on(today()) {
            Err(SolveError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, dir.path().join("grid_6.json"));
                assert_eq!(operation, "read");
            }
            other => unreachable!("expected FileSystem error, got {other:?}"),
        }
    }

    // Tests dates before the first grid are rejected before any file access
    // Verified by allowing negative day codes
    #[test]
    fn test_process_date_before_first_grid() {
        let dir = puzzle_dir();
        let mut processor = GridProcessor::new(cli_for(dir.path(), &["01-01-2020"]));

        let result = processor.process_on(today());
        assert!(matches!(
            result,
            Err(SolveError::InvalidParameter {
                parameter: "date",
                ..
            })
        ));
    }
}
