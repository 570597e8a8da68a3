use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense router identifier in `[0, n)`
pub type NodeId = usize;

/// Link weight (latency or bandwidth units); signed as supplied by the user
pub type Weight = i64;

/// A directed link between two routers
///
/// Serializes as a `[source, destination, weight]` triple, the same shape
/// used in topology files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(NodeId, NodeId, Weight)", into = "(NodeId, NodeId, Weight)")]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, destination: NodeId, weight: Weight) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((source, destination, weight): (NodeId, NodeId, Weight)) -> Self {
        Edge::new(source, destination, weight)
    }
}

impl From<Edge> for (NodeId, NodeId, Weight) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.destination, edge.weight)
    }
}

/// Best objective value for a router, or `Unreachable`
///
/// Serializes as the integer value, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Weight>", into = "Option<Weight>")]
pub enum Distance {
    Reachable(Weight),
    #[default]
    Unreachable,
}

impl Distance {
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Reachable(value) => Some(*value),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Reachable)
    }
}

impl From<Distance> for Option<Weight> {
    fn from(distance: Distance) -> Self {
        distance.value()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(value) => write!(f, "{}", value),
            Distance::Unreachable => write!(f, "Unreachable"),
        }
    }
}
