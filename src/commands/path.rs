//! Path command: the best path from the source to one router

use std::io::{self, Write};

use routewise_core::error::Result;
use routewise_core::format::OutputFormat;
use routewise_core::graph::{NodeId, Objective, Path};

use crate::cli::QueryArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::query::run_query;
use crate::commands::route::records::path_field;

/// Execute the path command
///
/// Fails with `Unreachable` (exit code 3) when no path exists.
pub fn execute(ctx: &CommandContext, args: &QueryArgs, target: NodeId) -> Result<()> {
    let query = run_query(ctx, args)?;
    let path = query.result.path_to(target)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_path(&mut out, ctx.format, &path, query.result.objective)
}

/// Write a single path in the requested format
pub fn output_path(
    out: &mut dyn Write,
    format: OutputFormat,
    path: &Path,
    objective: Objective,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{} ({} {})", path, path.cost, objective.label())?;
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "source": path.source,
                "target": path.target,
                "objective": objective,
                "cost": path.cost,
                "path": path.nodes(),
                "hops": path.hops,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Records => {
            writeln!(
                out,
                "P source={} target={} objective={} cost={} path={}",
                path.source,
                path.target,
                objective,
                path.cost,
                path_field(&path.nodes())
            )?;
        }
    }
    Ok(())
}
