use std::io::{self, Write};

use routewise_core::graph::{NodeId, ShortestPaths};

/// Join routers as `0>1>2`
pub fn path_field(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(">")
}

/// Output in records format
///
/// Header: `H routewise=1 source=<id> objective=<objective> routers=<n>`
/// Rows: `R <router> cost=<cost|unreachable> [path=<a>b>c>]`
pub fn output_route_records(out: &mut dyn Write, result: &ShortestPaths) -> io::Result<()> {
    writeln!(
        out,
        "H routewise=1 source={} objective={} routers={}",
        result.source,
        result.objective,
        result.node_count()
    )?;

    for router in 0..result.node_count() {
        match result.path_to(router) {
            Ok(path) => writeln!(
                out,
                "R {} cost={} path={}",
                router,
                path.cost,
                path_field(&path.nodes())
            )?,
            Err(_) => writeln!(out, "R {} cost=unreachable", router)?,
        }
    }

    Ok(())
}
