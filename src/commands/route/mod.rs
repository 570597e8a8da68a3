//! Route command: best paths from the source to every router

mod human;
mod json;
pub mod records;

use std::fs;
use std::io::Write;
use std::path::Path as FsPath;

use routewise_core::error::Result;
use routewise_core::format::OutputFormat;
use routewise_core::graph::{Edge, ShortestPaths};
use routewise_core::render::render_dot;

use crate::cli::QueryArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::query::run_query;

pub use human::output_route_human;
pub use json::route_json;
pub use records::output_route_records;

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &QueryArgs, dot: Option<&FsPath>) -> Result<()> {
    let query = run_query(ctx, args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output_route(&mut out, ctx.format, ctx.cli.quiet, &query.result)?;

    if let Some(dot_path) = dot {
        write_dot(dot_path, query.topology.routers, &query.effective_links(), &query.result)?;
    }

    Ok(())
}

/// Write route results in the requested format
pub fn output_route(
    out: &mut dyn Write,
    format: OutputFormat,
    quiet: bool,
    result: &ShortestPaths,
) -> Result<()> {
    match format {
        OutputFormat::Human => output_route_human(out, result, quiet)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&route_json(result))?)?
        }
        OutputFormat::Records => output_route_records(out, result)?,
    }
    Ok(())
}

/// Render the network to a DOT file
pub fn write_dot(path: &FsPath, routers: usize, links: &[Edge], result: &ShortestPaths) -> Result<()> {
    fs::write(path, render_dot(routers, links, result))?;
    tracing::debug!(path = %path.display(), "write_dot");
    Ok(())
}
