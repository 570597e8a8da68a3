use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::graph::types::Weight;

/// Direction of optimization for a path computation
///
/// Both objectives accumulate link weights by summation. `Latency` prefers
/// the smallest sum, `Bandwidth` the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Minimize cumulative weight
    Latency,
    /// Maximize cumulative weight
    Bandwidth,
}

impl Objective {
    /// Lowercase label used in output ("latency" / "bandwidth")
    pub fn label(&self) -> &'static str {
        match self {
            Objective::Latency => "latency",
            Objective::Bandwidth => "bandwidth",
        }
    }

    /// Capitalized label used in titles
    pub fn title(&self) -> &'static str {
        match self {
            Objective::Latency => "Latency",
            Objective::Bandwidth => "Bandwidth",
        }
    }

    /// Accumulate a link weight onto a path value
    pub fn extend(&self, accumulated: Weight, weight: Weight) -> Weight {
        accumulated.saturating_add(weight)
    }

    /// Rank two path values: `Greater` means `a` is the better value
    pub fn rank(&self, a: Weight, b: Weight) -> Ordering {
        match self {
            Objective::Latency => b.cmp(&a),
            Objective::Bandwidth => a.cmp(&b),
        }
    }

    /// Whether `a` is strictly better than `b` under this objective
    pub fn is_better(&self, a: Weight, b: Weight) -> bool {
        self.rank(a, b) == Ordering::Greater
    }
}

impl FromStr for Objective {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latency" | "l" => Ok(Objective::Latency),
            "bandwidth" | "b" => Ok(Objective::Bandwidth),
            other => Err(RouteError::InvalidObjective(other.to_string())),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
