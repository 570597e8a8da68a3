//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// routewise configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Objective used when `--objective` is not given ("latency" or "bandwidth")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_objective: Option<String>,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Transit policy applied to every query
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Transit policy settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Routers that never forward traffic
    #[serde(default)]
    pub no_transit: Vec<NodeId>,
}
