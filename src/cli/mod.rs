//! CLI argument parsing for routewise
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::QueryArgs;
use parse::parse_output_format;
pub use routewise_core::format::OutputFormat;
use routewise_core::graph::NodeId;

/// Routewise - best-path computation for router networks
#[derive(Parser, Debug)]
#[command(name = "routewise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records [default: config, then human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or filter directives
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file
    #[arg(long, global = true, env = "ROUTEWISE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute best paths from a source to every router
    Route {
        #[command(flatten)]
        query: QueryArgs,

        /// Also write a Graphviz DOT rendering to this file
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Show the best path from the source to one router
    Path {
        #[command(flatten)]
        query: QueryArgs,

        /// Destination router
        #[arg(long, short)]
        target: NodeId,
    },

    /// Render the network and its best-path tree as Graphviz DOT
    Render {
        #[command(flatten)]
        query: QueryArgs,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Enter a network at prompts on stdin and print the results
    Interactive {
        /// Also write a Graphviz DOT rendering to this file
        #[arg(long)]
        dot: Option<PathBuf>,
    },
}
