//! No-transit policy filtering
//!
//! A forbidden transit router keeps its incoming links, so it is still a
//! valid destination, but loses its outgoing links to other routers and so
//! cannot forward traffic. Self-loops are always retained.

use std::collections::BTreeSet;

use crate::graph::types::{Edge, NodeId};

/// Drop every non-self-loop link that originates at a forbidden router.
///
/// Surviving links are returned verbatim, in input order.
pub fn apply_no_transit_policy(edges: &[Edge], no_transit: &BTreeSet<NodeId>) -> Vec<Edge> {
    edges
        .iter()
        .filter(|edge| !no_transit.contains(&edge.source) || edge.is_self_loop())
        .copied()
        .collect()
}
