use crate::error::Result;
use crate::graph::builder::AdjacencyMap;
use crate::graph::objective::Objective;
use crate::graph::path::ShortestPaths;
use crate::graph::types::{Distance, NodeId, Weight};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace, warn};

/// Frontier entry: a tentative path value for `node`, reached from `via`
///
/// Ordered so that `BinaryHeap::pop` yields the entry the objective prefers;
/// ties go to the smaller router id, then the smaller `via`.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub value: Weight,
    pub via: Option<NodeId>,
    objective: Objective,
}

impl HeapEntry {
    pub fn new(node: NodeId, value: Weight, via: Option<NodeId>, objective: Objective) -> Self {
        HeapEntry {
            node,
            value,
            via,
            objective,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.objective
            .rank(self.value, other.value)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.via.cmp(&self.via))
    }
}

/// Single-source best paths with lazy deletion.
///
/// Pushes are unconditional; an entry popped for an already finalized
/// router is stale and skipped. The first pop of a router commits its value
/// and its predecessor together, so the predecessor always belongs to the
/// committed path. Values are final only when every weight is non-negative.
#[tracing::instrument(skip(adjacency), fields(nodes = adjacency.node_count(), edges = adjacency.edge_count()))]
pub fn dijkstra(
    adjacency: &AdjacencyMap,
    source: NodeId,
    objective: Objective,
) -> Result<ShortestPaths> {
    let node_count = adjacency.node_count();
    if source >= node_count {
        crate::bail_out_of_range!("source", source, node_count);
    }

    if adjacency.has_negative_weight() {
        warn!(
            objective = %objective,
            "negative link weights present; results may not be optimal"
        );
    }

    let mut distances = vec![Distance::Unreachable; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut finalized = vec![false; node_count];
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();

    let mut pushes = 1usize;
    let mut stale = 0usize;
    let mut committed = 0usize;

    heap.push(HeapEntry::new(source, 0, None, objective));

    while let Some(HeapEntry {
        node, value, via, ..
    }) = heap.pop()
    {
        if finalized[node] {
            stale += 1;
            continue;
        }

        finalized[node] = true;
        committed += 1;
        distances[node] = Distance::Reachable(value);
        predecessors[node] = via;
        trace!(node, value, ?via, "finalize");

        for &(next, weight) in adjacency.neighbors(node) {
            if finalized[next] {
                continue;
            }
            heap.push(HeapEntry::new(
                next,
                objective.extend(value, weight),
                Some(node),
                objective,
            ));
            pushes += 1;
        }
    }

    debug!(
        finalized = committed,
        unreachable = node_count - committed,
        pushes,
        stale,
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source,
        objective,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests;
