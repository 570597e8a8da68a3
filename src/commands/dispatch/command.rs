//! Command trait and context for dispatching commands

use std::collections::BTreeSet;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use routewise_core::config::RouteConfig;
use routewise_core::error::Result;
use routewise_core::graph::{NodeId, Objective};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RouteConfig,
    /// Effective output format: `--format`, then config, then human
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = RouteConfig::resolve(cli.config.as_deref())?;
        let format = match cli.format {
            Some(format) => format,
            None => config.format()?.unwrap_or_default(),
        };

        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    /// Resolve the objective: explicit flag, then config, then latency.
    ///
    /// An unrecognised flag value is an error, never a silent fallback.
    pub fn objective(&self, flag: Option<&str>) -> Result<Objective> {
        match flag {
            Some(value) => value.parse(),
            None => Ok(self.config.objective()?.unwrap_or(Objective::Latency)),
        }
    }

    /// No-transit routers from the flag plus the configured policy
    pub fn no_transit(&self, flag: &[NodeId]) -> BTreeSet<NodeId> {
        flag.iter()
            .chain(self.config.policy.no_transit.iter())
            .copied()
            .collect()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routewise {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Best-path computation for router networks.");
        println!();
        println!("Run `routewise --help` for usage information.");
        Ok(())
    }
}
