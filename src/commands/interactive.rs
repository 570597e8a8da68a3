//! Interactive command: collect a network from prompts, then report
//!
//! Prompts are written to stderr so stdout carries only the results.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use routewise_core::error::{Result, RouteError};
use routewise_core::graph::{compute, Edge, NodeId, Objective};
use routewise_core::topology::Topology;

use crate::cli::parse::parse_node_list;
use crate::commands::dispatch::CommandContext;
use crate::commands::route::{output_route, write_dot};

/// Answers collected from the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub topology: Topology,
    pub source: NodeId,
    pub objective: Objective,
}

struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            routewise_core::bail_usage!(format!(
                "unexpected end of input at prompt `{}`",
                prompt.trim_end_matches([':', ' '])
            ));
        }
        Ok(answer.trim().to_string())
    }

    fn ask_parsed<T: FromStr>(&mut self, prompt: &str, what: &str) -> Result<T> {
        let answer = self.ask(prompt)?;
        answer
            .parse()
            .map_err(|_| RouteError::invalid_value(what, &answer))
    }
}

fn parse_link(answer: &str) -> Result<Edge> {
    let invalid = || RouteError::invalid_value("connection", answer);
    let fields: Vec<&str> = answer.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(invalid());
    }
    Ok(Edge::new(
        fields[0].parse().map_err(|_| invalid())?,
        fields[1].parse().map_err(|_| invalid())?,
        fields[2].parse().map_err(|_| invalid())?,
    ))
}

/// Run the prompt sequence.
///
/// An empty objective answer selects `default_objective`; any other answer
/// that is not `l`/`b` (or `latency`/`bandwidth`) is an error.
pub fn read_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    default_objective: Objective,
) -> Result<Session> {
    let mut prompter = Prompter { input, output };

    let routers: usize = prompter.ask_parsed("Enter number of routers: ", "router count")?;
    let link_count: usize =
        prompter.ask_parsed("Enter number of connections (edges): ", "connection count")?;

    let answer = prompter.ask(&format!(
        "minimize latency(l) or maximize bandwidth(b) [{}]: ",
        default_objective
    ))?;
    let objective = if answer.is_empty() {
        default_objective
    } else {
        answer.parse()?
    };

    let mut links = Vec::new();
    for _ in 0..link_count {
        let answer = prompter
            .ask("Enter the src router, dest router, and weight separated by spaces: ")?;
        links.push(parse_link(&answer)?);
    }

    let source: NodeId = prompter.ask_parsed("Enter source node: ", "source router")?;

    let no_transit = match prompter
        .ask("Allow transit packets (y/n): ")?
        .to_lowercase()
        .as_str()
    {
        "y" | "yes" => Vec::new(),
        "n" | "no" => {
            parse_node_list(&prompter.ask("Enter no-transit routers (space-separated): ")?)?
        }
        other => return Err(RouteError::invalid_value("transit answer (y/n)", other)),
    };

    let topology = Topology {
        routers,
        links,
        no_transit,
    };
    topology.validate()?;

    Ok(Session {
        topology,
        source,
        objective,
    })
}

/// Execute the interactive command
pub fn execute(ctx: &CommandContext, dot: Option<&Path>) -> Result<()> {
    let session = {
        let stdin = io::stdin();
        read_session(stdin.lock(), io::stderr(), ctx.objective(None)?)?
    };

    let request = session
        .topology
        .request(session.source, session.objective)
        .with_no_transit(ctx.no_transit(&[]));
    let result = compute(&request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if ctx.format.is_human() {
        writeln!(out)?;
    }
    output_route(&mut out, ctx.format, ctx.cli.quiet, &result)?;

    if let Some(dot_path) = dot {
        write_dot(
            dot_path,
            session.topology.routers,
            &request.effective_edges(),
            &result,
        )?;
    }

    Ok(())
}
