//! Row and column selection criteria
//!
//! Criteria form a closed set of kinds so evaluation is a single match, resolved once
//! while the candidate index is built rather than during search.

use crate::puzzle::entity::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Numeric comparison used by statistic thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Value must be greater than or equal to the threshold
    AtLeast,
    /// Value must be less than or equal to the threshold
    AtMost,
    /// Value must equal the threshold
    Exactly,
}

impl Comparison {
    /// Apply the comparison to a value and threshold
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::AtMost => value <= threshold,
            Self::Exactly => (value - threshold).abs() < f64::EPSILON,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
            Self::Exactly => "=",
        }
    }
}

/// A selection criterion attached to a row or column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Played for the given team
    Team {
        /// Team code
        code: String,
    },
    /// Received the given award
    Award {
        /// Award name
        name: String,
    },
    /// Listed at the given playing position
    Position {
        /// Position code
        code: String,
    },
    /// Numeric statistic compared against a threshold
    Stat {
        /// Statistic name
        stat: String,
        /// Comparison operator
        comparison: Comparison,
        /// Threshold value
        value: f64,
    },
    /// Explicit membership list shipped with the puzzle
    Listed {
        /// Eligible player identities
        ids: BTreeSet<EntityId>,
    },
}

impl Criterion {
    /// Played for `code`
    pub fn team(code: impl Into<String>) -> Self {
        Self::Team { code: code.into() }
    }

    /// Received `name`
    pub fn award(name: impl Into<String>) -> Self {
        Self::Award { name: name.into() }
    }

    /// Statistic `stat` satisfies `comparison` against `value`
    pub fn stat(stat: impl Into<String>, comparison: Comparison, value: f64) -> Self {
        Self::Stat {
            stat: stat.into(),
            comparison,
            value,
        }
    }

    /// Explicitly listed players
    pub fn listed<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Listed {
            ids: ids.into_iter().map(EntityId::new).collect(),
        }
    }

    /// Evaluate this criterion against an entity's attributes
    ///
    /// A missing statistic never satisfies a threshold.
    pub fn matches(&self, entity: &Entity) -> bool {
        let attributes = &entity.attributes;
        match self {
            Self::Team { code } => attributes.teams.contains(code),
            Self::Award { name } => attributes.awards.contains(name),
            Self::Position { code } => attributes.positions.contains(code),
            Self::Stat {
                stat,
                comparison,
                value,
            } => attributes
                .stats
                .get(stat)
                .is_some_and(|&actual| comparison.holds(actual, *value)),
            Self::Listed { ids } => ids.contains(&entity.id),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team { code } => write!(f, "team {code}"),
            Self::Award { name } => write!(f, "award {name}"),
            Self::Position { code } => write!(f, "position {code}"),
            Self::Stat {
                stat,
                comparison,
                value,
            } => write!(f, "{stat} {} {value}", comparison.symbol()),
            Self::Listed { ids } => write!(f, "one of {} listed players", ids.len()),
        }
    }
}
