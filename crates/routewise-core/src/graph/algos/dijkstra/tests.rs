use super::*;
use crate::error::RouteError;
use crate::graph::types::Edge;
use proptest::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

fn edges(raw: &[(NodeId, NodeId, Weight)]) -> Vec<Edge> {
    raw.iter().copied().map(Edge::from).collect()
}

fn run(n: usize, raw: &[(NodeId, NodeId, Weight)], source: NodeId, objective: Objective) -> ShortestPaths {
    let adjacency = AdjacencyMap::build(n, &edges(raw)).unwrap();
    dijkstra(&adjacency, source, objective).unwrap()
}

/// Minimum cost over all simple paths from `source`, by exhaustive DFS
fn brute_force_min(n: usize, edges: &[Edge], source: NodeId) -> Vec<Option<Weight>> {
    fn walk(
        node: NodeId,
        cost: Weight,
        edges: &[Edge],
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<Weight>>,
    ) {
        if best[node].is_none_or(|b| cost < b) {
            best[node] = Some(cost);
        }
        for edge in edges.iter().filter(|e| e.source == node) {
            if !on_path[edge.destination] {
                on_path[edge.destination] = true;
                walk(edge.destination, cost + edge.weight, edges, on_path, best);
                on_path[edge.destination] = false;
            }
        }
    }

    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    on_path[source] = true;
    walk(source, 0, edges, &mut on_path, &mut best);
    best
}

#[test]
fn test_heap_entry_latency_pops_smallest() {
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry::new(1, 7, Some(0), Objective::Latency));
    heap.push(HeapEntry::new(2, 3, Some(0), Objective::Latency));
    heap.push(HeapEntry::new(3, 5, Some(0), Objective::Latency));

    let order: Vec<Weight> = std::iter::from_fn(|| heap.pop().map(|e| e.value)).collect();
    assert_eq!(order, vec![3, 5, 7]);
}

#[test]
fn test_heap_entry_bandwidth_pops_largest() {
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry::new(1, 7, Some(0), Objective::Bandwidth));
    heap.push(HeapEntry::new(2, 3, Some(0), Objective::Bandwidth));
    heap.push(HeapEntry::new(3, 5, Some(0), Objective::Bandwidth));

    let order: Vec<Weight> = std::iter::from_fn(|| heap.pop().map(|e| e.value)).collect();
    assert_eq!(order, vec![7, 5, 3]);
}

#[test]
fn test_heap_entry_ties_prefer_smaller_node() {
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry::new(4, 2, None, Objective::Latency));
    heap.push(HeapEntry::new(1, 2, None, Objective::Latency));
    assert_eq!(heap.pop().map(|e| e.node), Some(1));
}

#[test]
fn test_latency_basic_graph() {
    let result = run(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 7)], 0, Objective::Latency);

    assert_eq!(
        result.distances,
        vec![
            Distance::Reachable(0),
            Distance::Reachable(4),
            Distance::Reachable(5)
        ]
    );
    assert_eq!(result.path_to(2).unwrap().hops, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_isolated_router_is_unreachable() {
    let result = run(4, &[(0, 1, 4), (1, 2, 1), (0, 2, 7)], 0, Objective::Latency);

    assert_eq!(result.distances[2], Distance::Reachable(5));
    assert_eq!(result.distances[3], Distance::Unreachable);
    assert_eq!(result.predecessors[3], None);
}

#[test]
fn test_bandwidth_accumulates_upward() {
    let result = run(3, &[(0, 1, 10), (1, 2, 5)], 0, Objective::Bandwidth);

    assert_eq!(
        result.distances,
        vec![
            Distance::Reachable(0),
            Distance::Reachable(10),
            Distance::Reachable(15)
        ]
    );
    assert_eq!(result.objective, Objective::Bandwidth);
}

#[test]
fn test_bandwidth_prefers_larger_branch() {
    let result = run(3, &[(0, 1, 2), (0, 2, 9), (2, 1, 4)], 0, Objective::Bandwidth);

    assert_eq!(result.distances[2], Distance::Reachable(9));
    assert_eq!(result.distances[1], Distance::Reachable(13));
    assert_eq!(result.path_to(1).unwrap().hops, vec![(0, 2), (2, 1)]);
}

#[test]
fn test_source_distance_is_zero_with_self_loop() {
    let result = run(2, &[(0, 0, 5), (0, 1, 3)], 0, Objective::Latency);
    assert_eq!(result.distances[0], Distance::Reachable(0));
    assert_eq!(result.predecessors[0], None);
}

#[test]
fn test_cycle_back_to_source_does_not_change_it() {
    let result = run(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)], 0, Objective::Latency);
    assert_eq!(result.distances[0], Distance::Reachable(0));
    assert_eq!(result.distances[2], Distance::Reachable(2));
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let result = run(2, &[(0, 1, 9), (0, 1, 2), (0, 1, 5)], 0, Objective::Latency);
    assert_eq!(result.distances[1], Distance::Reachable(2));
    assert_eq!(result.predecessors[1], Some(0));
}

#[test]
fn test_predecessor_matches_committed_value() {
    // Router 3 is first discovered via 1 (cost 10) but committed via 2 (cost 4).
    let result = run(
        4,
        &[(0, 1, 1), (1, 3, 9), (0, 2, 2), (2, 3, 2)],
        0,
        Objective::Latency,
    );
    assert_eq!(result.distances[3], Distance::Reachable(4));
    assert_eq!(result.predecessors[3], Some(2));
}

#[test]
fn test_zero_weight_edges() {
    let result = run(3, &[(0, 1, 0), (1, 2, 0)], 0, Objective::Latency);
    assert_eq!(result.distances[2], Distance::Reachable(0));
    assert_eq!(result.path_to(2).unwrap().hops, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_nonzero_source() {
    let result = run(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 7)], 1, Objective::Latency);
    assert_eq!(result.distances[0], Distance::Unreachable);
    assert_eq!(result.distances[1], Distance::Reachable(0));
    assert_eq!(result.distances[2], Distance::Reachable(1));
}

#[test]
fn test_source_out_of_range() {
    let adjacency = AdjacencyMap::build(2, &[]).unwrap();
    let err = dijkstra(&adjacency, 2, Objective::Latency).unwrap_err();
    assert!(matches!(
        err,
        RouteError::OutOfRange {
            node: 2,
            node_count: 2,
            ..
        }
    ));
}

#[test]
fn test_empty_graph_rejects_any_source() {
    let adjacency = AdjacencyMap::build(0, &[]).unwrap();
    assert!(dijkstra(&adjacency, 0, Objective::Latency).is_err());
}

#[test]
fn test_single_router() {
    let result = run(1, &[], 0, Objective::Bandwidth);
    assert_eq!(result.distances, vec![Distance::Reachable(0)]);
}

#[test]
fn test_latency_saturates_at_max_weight() {
    let result = run(
        4,
        &[(0, 1, Weight::MAX), (1, 2, Weight::MAX), (2, 3, 1)],
        0,
        Objective::Latency,
    );
    assert_eq!(result.distances[1], Distance::Reachable(Weight::MAX));
    assert_eq!(result.distances[2], Distance::Reachable(Weight::MAX));
    assert_eq!(result.distances[3], Distance::Reachable(Weight::MAX));
    assert_eq!(result.path_to(3).unwrap().hops, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn test_bandwidth_saturates_at_max_weight() {
    let result = run(3, &[(0, 1, Weight::MAX), (1, 2, 10)], 0, Objective::Bandwidth);
    assert_eq!(result.distances[2], Distance::Reachable(Weight::MAX));
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn warnings_from(raw: &[(NodeId, NodeId, Weight)]) -> (ShortestPaths, String) {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        run(3, raw, 0, Objective::Latency)
    });
    let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    (result, text)
}

#[test]
fn test_negative_weight_is_accepted_with_warning() {
    let (result, logs) = warnings_from(&[(0, 1, 5), (1, 2, -3)]);

    assert_eq!(result.distances[2], Distance::Reachable(2));
    assert!(logs.contains("negative link weights present"));
    assert!(logs.contains("WARN"));
}

#[test]
fn test_non_negative_weights_do_not_warn() {
    let (_, logs) = warnings_from(&[(0, 1, 5), (1, 2, 3)]);
    assert!(logs.is_empty());
}

proptest! {
    #[test]
    fn prop_latency_matches_brute_force(
        n in 1usize..7,
        raw in prop::collection::vec((0usize..7, 0usize..7, 0i64..20), 0..18),
    ) {
        let edges: Vec<Edge> = raw
            .into_iter()
            .filter(|(s, d, _)| *s < n && *d < n)
            .map(Edge::from)
            .collect();
        let adjacency = AdjacencyMap::build(n, &edges).unwrap();
        let result = dijkstra(&adjacency, 0, Objective::Latency).unwrap();
        let expected = brute_force_min(n, &edges, 0);

        prop_assert_eq!(result.distances[0], Distance::Reachable(0));
        for node in 0..n {
            prop_assert_eq!(result.distances[node].value(), expected[node]);
        }

        // Every reconstructed path is a real path whose weight sum is the
        // committed value.
        for path in result.paths() {
            let mut total = 0;
            for (from, to) in &path.hops {
                let best = edges
                    .iter()
                    .filter(|e| e.source == *from && e.destination == *to)
                    .map(|e| e.weight)
                    .min();
                prop_assert!(best.is_some());
                total += best.unwrap_or_default();
            }
            prop_assert_eq!(total, path.cost);
        }
    }

    #[test]
    fn prop_bandwidth_on_trees_sums_unique_route(
        parents in prop::collection::vec((any::<prop::sample::Index>(), 0i64..50), 0..12),
    ) {
        // Router i + 1 hangs off a random earlier router.
        let n = parents.len() + 1;
        let mut edges = Vec::new();
        let mut expected = vec![0i64; n];
        for (i, (index, weight)) in parents.iter().enumerate() {
            let child = i + 1;
            let parent = index.index(child);
            edges.push(Edge::new(parent, child, *weight));
            expected[child] = expected[parent] + weight;
        }

        let adjacency = AdjacencyMap::build(n, &edges).unwrap();
        let result = dijkstra(&adjacency, 0, Objective::Bandwidth).unwrap();
        for node in 0..n {
            prop_assert_eq!(result.distances[node], Distance::Reachable(expected[node]));
        }
    }

    #[test]
    fn prop_runs_are_idempotent(
        n in 1usize..8,
        raw in prop::collection::vec((0usize..8, 0usize..8, 0i64..10), 0..24),
    ) {
        let edges: Vec<Edge> = raw
            .into_iter()
            .filter(|(s, d, _)| *s < n && *d < n)
            .map(Edge::from)
            .collect();
        let adjacency = AdjacencyMap::build(n, &edges).unwrap();
        let first = dijkstra(&adjacency, 0, Objective::Latency).unwrap();
        let second = dijkstra(&adjacency, 0, Objective::Latency).unwrap();

        prop_assert_eq!(&first.distances, &second.distances);
        prop_assert_eq!(first.paths(), second.paths());
    }
}
