//! Command implementations for all routewise commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{interactive, path, render, route};
use routewise_core::error::Result;

use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Route { query, dot } => route::execute(ctx, query, dot.as_deref()),
            Commands::Path { query, target } => path::execute(ctx, query, *target),
            Commands::Render { query, output } => render::execute(ctx, query, output.as_deref()),
            Commands::Interactive { dot } => interactive::execute(ctx, dot.as_deref()),
        };
        trace_command!(ctx, "execute_command");
        result
    }
}
