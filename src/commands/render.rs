//! Render command: Graphviz DOT output of the network and best-path tree

use std::io::Write;
use std::path::Path;

use routewise_core::error::Result;
use routewise_core::render::render_dot;

use crate::cli::QueryArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::query::run_query;
use crate::commands::route::write_dot;

/// Execute the render command
///
/// Links removed by the no-transit policy are not drawn.
pub fn execute(ctx: &CommandContext, args: &QueryArgs, output: Option<&Path>) -> Result<()> {
    let query = run_query(ctx, args)?;
    let links = query.effective_links();

    match output {
        Some(path) => {
            write_dot(path, query.topology.routers, &links, &query.result)?;
            if ctx.format.is_human() && !ctx.cli.quiet {
                println!("Wrote {}", path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(render_dot(query.topology.routers, &links, &query.result).as_bytes())?;
        }
    }

    Ok(())
}
