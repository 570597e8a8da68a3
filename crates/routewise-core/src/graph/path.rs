//! Engine results and path reconstruction

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, RouteError};
use crate::graph::objective::Objective;
use crate::graph::types::{Distance, NodeId, Weight};

/// Output of a single-source computation
///
/// `distances[v]` is the committed value for router `v`; `predecessors[v]`
/// is the router the committed path to `v` arrived from (`None` for the
/// source and for unreachable routers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub objective: Objective,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, node: NodeId) -> Result<Distance> {
        self.distances
            .get(node)
            .copied()
            .ok_or_else(|| RouteError::out_of_range("router", node, self.node_count()))
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances
            .get(node)
            .is_some_and(Distance::is_reachable)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    /// Reconstruct the best path to `target`.
    ///
    /// Fails with `OutOfRange` for an unknown router and `Unreachable` when
    /// no path exists.
    pub fn path_to(&self, target: NodeId) -> Result<Path> {
        let cost = match self.distance(target)? {
            Distance::Reachable(cost) => cost,
            Distance::Unreachable => return Err(RouteError::Unreachable { node: target }),
        };

        Ok(Path {
            source: self.source,
            target,
            cost,
            hops: reconstruct_path(&self.predecessors, target),
        })
    }

    /// Every reachable router's best path, in router order
    pub fn paths(&self) -> Vec<Path> {
        (0..self.node_count())
            .filter_map(|node| self.path_to(node).ok())
            .collect()
    }

    /// Union of the links used by all best paths (the shortest-path tree)
    pub fn tree_edges(&self) -> BTreeSet<(NodeId, NodeId)> {
        self.paths()
            .into_iter()
            .flat_map(|path| path.hops.into_iter())
            .collect()
    }
}

/// An ordered best path from the source to a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub source: NodeId,
    pub target: NodeId,
    pub cost: Weight,
    pub hops: Vec<(NodeId, NodeId)>,
}

impl Path {
    /// Routers visited, source first
    pub fn nodes(&self) -> Vec<NodeId> {
        match self.hops.first() {
            None => vec![self.target],
            Some(&(first, _)) => std::iter::once(first)
                .chain(self.hops.iter().map(|&(_, to)| to))
                .collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<String> = self.nodes().iter().map(ToString::to_string).collect();
        write!(f, "{}", nodes.join(" -> "))
    }
}

/// Walk predecessors back from `target`; returns links in source-to-target order.
///
/// Empty when `target` has no predecessor (the source itself, or a router
/// the caller should have checked for reachability first). The walk is
/// bounded by the map length so a malformed map cannot loop forever.
pub fn reconstruct_path(predecessors: &[Option<NodeId>], target: NodeId) -> Vec<(NodeId, NodeId)> {
    let mut hops = Vec::new();
    let mut current = target;

    while let Some(prev) = predecessors.get(current).copied().flatten() {
        if hops.len() >= predecessors.len() {
            break;
        }
        hops.push((prev, current));
        current = prev;
    }

    hops.reverse();
    hops
}
