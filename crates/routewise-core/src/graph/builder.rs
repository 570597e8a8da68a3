//! Adjacency construction from flat link lists

use crate::error::{Result, RouteError};
use crate::graph::types::{Edge, NodeId, Weight};

/// Outgoing links per router, indexed by router id
///
/// Built once per computation and read-only afterwards. Every router in
/// `[0, n)` has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    outbound: Vec<Vec<(NodeId, Weight)>>,
}

impl AdjacencyMap {
    /// Build an adjacency map for `node_count` routers.
    ///
    /// Entry `i` lists `(destination, weight)` for every edge whose source is
    /// `i`, in input order. Self-loops and parallel edges are kept. Fails with
    /// `OutOfRange` if an endpoint is not in `[0, node_count)`, and with
    /// `InvalidValue` if `node_count` buckets cannot be allocated.
    pub fn build(node_count: usize, edges: &[Edge]) -> Result<Self> {
        let mut outbound: Vec<Vec<(NodeId, Weight)>> = Vec::new();
        outbound
            .try_reserve_exact(node_count)
            .map_err(|_| RouteError::invalid_value("router count", node_count))?;
        outbound.resize_with(node_count, Vec::new);

        for edge in edges {
            if edge.source >= node_count {
                crate::bail_out_of_range!("edge source", edge.source, node_count);
            }
            if edge.destination >= node_count {
                crate::bail_out_of_range!("edge destination", edge.destination, node_count);
            }
            outbound[edge.source].push((edge.destination, edge.weight));
        }

        Ok(AdjacencyMap { outbound })
    }

    pub fn node_count(&self) -> usize {
        self.outbound.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outbound.iter().map(Vec::len).sum()
    }

    /// Outgoing `(destination, weight)` pairs; empty for unknown ids
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.outbound.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.outbound.len()
    }

    pub fn has_negative_weight(&self) -> bool {
        self.outbound
            .iter()
            .flatten()
            .any(|(_, weight)| *weight < 0)
    }
}
