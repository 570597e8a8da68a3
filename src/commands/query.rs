//! Shared topology loading and computation for query commands

use routewise_core::error::Result;
use routewise_core::graph::{compute, Edge, RouteRequest, ShortestPaths};
use routewise_core::topology::Topology;
use routewise_core::trace_time;

use crate::cli::QueryArgs;
use crate::commands::dispatch::CommandContext;

/// A loaded topology with the request built from it and its result
pub struct Query {
    pub topology: Topology,
    pub request: RouteRequest,
    pub result: ShortestPaths,
}

impl Query {
    /// Links that survived the no-transit policy
    pub fn effective_links(&self) -> Vec<Edge> {
        self.request.effective_edges()
    }
}

/// Load the topology named by `args` and run the best-path computation
pub fn run_query(ctx: &CommandContext, args: &QueryArgs) -> Result<Query> {
    let objective = ctx.objective(args.objective.as_deref())?;

    let topology = Topology::load(&args.topology)?;
    trace_time!(ctx.start, "load_topology", routers = topology.routers);

    let request = topology
        .request(args.source, objective)
        .with_no_transit(ctx.no_transit(&args.no_transit));
    let result = compute(&request)?;
    trace_time!(ctx.start, "compute", reachable = result.reachable_count());

    Ok(Query {
        topology,
        request,
        result,
    })
}
