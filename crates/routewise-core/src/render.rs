//! Graphviz rendering of a network with its best-path tree highlighted

use std::fmt::Write;

use crate::graph::{Distance, Edge, ShortestPaths};

/// Render `links` over `routers` routers as a DOT `digraph`.
///
/// Links on any best path from the source are drawn red; the source is a
/// double circle and unreachable routers are greyed out. Among parallel
/// links only the first one whose weight yields the committed value of its
/// destination is highlighted.
pub fn render_dot(routers: usize, links: &[Edge], result: &ShortestPaths) -> String {
    let mut tree = result.tree_edges();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph routewise {{");
    let _ = writeln!(
        out,
        "    label=\"Shortest Path Visualization ({})\";",
        result.objective.title()
    );
    let _ = writeln!(out, "    labelloc=t;");
    let _ = writeln!(
        out,
        "    node [shape=circle, style=filled, fillcolor=lightblue];"
    );
    let _ = writeln!(out, "    edge [color=gray];");

    for router in 0..routers {
        let mut attrs = Vec::new();
        if router == result.source {
            attrs.push("shape=doublecircle".to_string());
        }
        if !result.is_reachable(router) {
            attrs.push("fillcolor=lightgray".to_string());
            attrs.push("fontcolor=gray40".to_string());
        }
        if attrs.is_empty() {
            let _ = writeln!(out, "    {};", router);
        } else {
            let _ = writeln!(out, "    {} [{}];", router, attrs.join(", "));
        }
    }

    for link in links {
        let hop = (link.source, link.destination);
        let on_path = tree.contains(&hop) && commits(result, link) && tree.remove(&hop);
        if on_path {
            let _ = writeln!(
                out,
                "    {} -> {} [label=\"{}\", color=red, penwidth=2];",
                link.source, link.destination, link.weight
            );
        } else {
            let _ = writeln!(
                out,
                "    {} -> {} [label=\"{}\"];",
                link.source, link.destination, link.weight
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Whether `link` reproduces the committed value of its destination
fn commits(result: &ShortestPaths, link: &Edge) -> bool {
    match (
        result.distances.get(link.source),
        result.distances.get(link.destination),
    ) {
        (Some(Distance::Reachable(from)), Some(Distance::Reachable(to))) => {
            result.objective.extend(*from, link.weight) == *to
        }
        _ => false,
    }
}
