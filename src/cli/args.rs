use clap::Args;
use std::path::PathBuf;

use routewise_core::graph::NodeId;

/// Topology and query selection shared by `route`, `path` and `render`
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Topology file (.json, .toml, or plain text edge list)
    pub topology: PathBuf,

    /// Source router
    #[arg(long, short)]
    pub source: NodeId,

    /// Objective: latency (l) or bandwidth (b) [default: config, then latency]
    #[arg(long)]
    pub objective: Option<String>,

    /// Routers that must not forward traffic (comma-separated or repeated)
    #[arg(long, value_delimiter = ',', action = clap::ArgAction::Append)]
    pub no_transit: Vec<NodeId>,
}
