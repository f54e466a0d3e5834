/// Command-line parsing and request orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Spinner feedback during a solve
pub mod progress;
/// Text report rendering
pub mod report;
/// Day codes and date arguments
pub mod schedule;
/// Puzzle definitions keyed by day code
pub mod source;
