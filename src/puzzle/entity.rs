//! Players supplied by the puzzle source

use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Stable player identity as published by the puzzle source
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create an identity from any string-like key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Attribute record consulted when evaluating criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Team codes the player appeared for
    #[serde(default)]
    pub teams: BTreeSet<String>,
    /// Awards and honours received
    #[serde(default)]
    pub awards: BTreeSet<String>,
    /// Listed playing positions
    #[serde(default)]
    pub positions: BTreeSet<String>,
    /// Numeric statistics keyed by name (career or best season)
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// A candidate answer with identity, attributes, and popularity weight
///
/// Lower weight means fewer people picked this player, so the player is rarer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique key
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Attributes used by criteria
    #[serde(flatten)]
    pub attributes: Attributes,
    /// Popularity weight (vote count)
    #[serde(rename = "votes", default)]
    pub weight: u64,
}

impl Entity {
    /// Create an entity with empty attributes
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: u64) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            attributes: Attributes::default(),
            weight,
        }
    }

    /// Add a team to the attribute record
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.attributes.teams.insert(team.into());
        self
    }

    /// Add an award to the attribute record
    #[must_use]
    pub fn with_award(mut self, award: impl Into<String>) -> Self {
        self.attributes.awards.insert(award.into());
        self
    }

    /// Add a playing position to the attribute record
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.attributes.positions.insert(position.into());
        self
    }

    /// Set a numeric statistic
    #[must_use]
    pub fn with_stat(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.attributes.stats.insert(stat.into(), value);
        self
    }

    /// Display name transliterated to ASCII, control characters removed and whitespace
    /// collapsed
    pub fn display_name(&self) -> String {
        deunicode(&self.name)
            .split(|c: char| c.is_whitespace() || c.is_control())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
