//! End-to-end computation: policy filter, adjacency build, engine

use std::collections::BTreeSet;
use tracing::debug;

use crate::error::Result;
use crate::graph::algos::dijkstra;
use crate::graph::builder::AdjacencyMap;
use crate::graph::objective::Objective;
use crate::graph::path::ShortestPaths;
use crate::graph::policy::apply_no_transit_policy;
use crate::graph::types::{Edge, NodeId};

/// Everything a single best-path query needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub node_count: usize,
    pub edges: Vec<Edge>,
    pub source: NodeId,
    pub objective: Objective,
    pub no_transit: BTreeSet<NodeId>,
}

impl RouteRequest {
    pub fn new(node_count: usize, edges: Vec<Edge>, source: NodeId, objective: Objective) -> Self {
        RouteRequest {
            node_count,
            edges,
            source,
            objective,
            no_transit: BTreeSet::new(),
        }
    }

    pub fn with_no_transit(mut self, no_transit: impl IntoIterator<Item = NodeId>) -> Self {
        self.no_transit.extend(no_transit);
        self
    }

    /// Links that survive the no-transit policy
    pub fn effective_edges(&self) -> Vec<Edge> {
        if self.no_transit.is_empty() {
            self.edges.clone()
        } else {
            apply_no_transit_policy(&self.edges, &self.no_transit)
        }
    }
}

/// Run a best-path query.
///
/// No-transit ids must name routers in `[0, node_count)`.
pub fn compute(request: &RouteRequest) -> Result<ShortestPaths> {
    if let Some(&node) = request
        .no_transit
        .iter()
        .find(|&&node| node >= request.node_count)
    {
        crate::bail_out_of_range!("no-transit router", node, request.node_count);
    }

    let edges = request.effective_edges();
    debug!(
        input_edges = request.edges.len(),
        effective_edges = edges.len(),
        no_transit = ?request.no_transit,
        "apply_no_transit_policy"
    );

    let adjacency = AdjacencyMap::build(request.node_count, &edges)?;
    dijkstra(&adjacency, request.source, request.objective)
}
