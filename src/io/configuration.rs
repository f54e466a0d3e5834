//! Constants and runtime defaults

/// First published grid (day code 0), as `(year, month, day)`
pub const FIRST_GRID_DATE: (i32, u32, u32) = (2023, 7, 4);

/// Format for dates on the command line and in output names
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Date argument meaning "the newest published grid"
pub const DEFAULT_DATE: &str = "today";

// The grid for a given calendar day is published the following day
/// Days subtracted from the current date when resolving [`DEFAULT_DATE`]
pub const PUBLICATION_LAG_DAYS: u64 = 1;

// Output settings
/// Prefix of report file names
pub const OUTPUT_PREFIX: &str = "hoopgrids_solved_";
/// Extension of report file names
pub const OUTPUT_EXTENSION: &str = "txt";

/// Prefix of puzzle definition files inside a puzzle directory
pub const PUZZLE_FILE_PREFIX: &str = "grid_";

/// Spinner redraw interval while solving
pub const SPINNER_TICK_MS: u64 = 80;

/// Separator between report sections
pub const SECTION_SEPARATOR: &str = "*******************";

/// Divider between the chosen answers and the per-cell candidate listings
pub const RESULTS_SEPARATOR: &str = "$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$$";
