use std::io::{self, Write};

use routewise_core::graph::ShortestPaths;

/// Output in human-readable format
///
/// One `Router <id> - <cost> (<objective>)` line per router, followed by the
/// path for routers other than the source unless `quiet` is set.
pub fn output_route_human(
    out: &mut dyn Write,
    result: &ShortestPaths,
    quiet: bool,
) -> io::Result<()> {
    if !quiet {
        writeln!(out, "Optimal Path Results:")?;
    }

    let label = result.objective.label();
    for router in 0..result.node_count() {
        match result.path_to(router) {
            Ok(path) => {
                writeln!(out, "Router {} - {} ({})", router, path.cost, label)?;
                if !quiet && !path.hops.is_empty() {
                    writeln!(out, "  path: {}", path)?;
                }
            }
            Err(_) => writeln!(out, "Router {} - Unreachable", router)?,
        }
    }

    Ok(())
}
