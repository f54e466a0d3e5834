//! Puzzle definitions keyed by day code
//!
//! Retrieval is abstracted behind [`PuzzleSource`]; the bundled implementation reads
//! JSON snapshots from a local directory.

use crate::io::configuration::PUZZLE_FILE_PREFIX;
use crate::io::error::{Result, SolveError, WithPath};
use crate::puzzle::criterion::Criterion;
use crate::puzzle::entity::Entity;
use crate::puzzle::grid::Grid;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A day's grid definition together with its pool of players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Row criteria, top to bottom
    pub rows: Vec<Criterion>,
    /// Column criteria, left to right
    pub columns: Vec<Criterion>,
    /// Every player the puzzle accepts answers from
    pub players: Vec<Entity>,
}

impl PuzzleDefinition {
    /// Validate the grid shape and split into grid and pool
    ///
    /// # Errors
    ///
    /// Returns `SolveError::MalformedGrid` if the criteria do not form a square grid
    pub fn into_parts(self) -> Result<(Grid, Vec<Entity>)> {
        let grid = Grid::build(self.rows, self.columns)?;
        Ok((grid, self.players))
    }
}

/// Lookup of the grid published for a day code
pub trait PuzzleSource {
    /// Load the definition for `day_code`
    ///
    /// # Errors
    ///
    /// Returns an error if the definition is missing or cannot be decoded
    fn load(&self, day_code: i64) -> Result<PuzzleDefinition>;
}

/// Reads `grid_<day code>.json` files from a directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the definition file for a day code
    pub fn path_for(&self, day_code: i64) -> PathBuf {
        self.root.join(format!("{PUZZLE_FILE_PREFIX}{day_code}.json"))
    }

    fn decode(path: &Path, contents: &str) -> Result<PuzzleDefinition> {
        serde_json::from_str(contents).map_err(|source| SolveError::PuzzleLoad {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PuzzleSource for DirectorySource {
    fn load(&self, day_code: i64) -> Result<PuzzleDefinition> {
        let path = self.path_for(day_code);
        debug!("reading puzzle definition from {}", path.display());
        let contents = fs::read_to_string(&path).with_path(&path, "read")?;
        let definition = Self::decode(&path, &contents)?;
        info!(
            "loaded grid {day_code}: {}x{} criteria, {} players",
            definition.rows.len(),
            definition.columns.len(),
            definition.players.len()
        );
        Ok(definition)
    }
}
