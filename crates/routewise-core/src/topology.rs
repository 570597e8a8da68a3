//! Router network descriptions and their on-disk formats
//!
//! A topology file is picked apart by extension:
//! - `.json`: `{"routers": 3, "links": [[0, 1, 4], ...], "no_transit": [1]}`
//! - `.toml`: `routers = 3`, `links = [[0, 1, 4], ...]`, `no_transit = [1]`
//! - anything else: plain text, router count on the first line, then one
//!   `src dst weight` link per line. `#` starts a comment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, RouteError};
use crate::graph::{Edge, NodeId, Objective, RouteRequest, Weight};

/// A static snapshot of a router network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Number of routers; ids are `0..routers`
    pub routers: usize,

    /// Directed links as `[source, destination, weight]`
    #[serde(default)]
    pub links: Vec<Edge>,

    /// Routers that must not forward traffic
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub no_transit: Vec<NodeId>,
}

/// Recognized topology file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Json,
    Toml,
    Text,
}

impl TopologyFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => TopologyFormat::Json,
            Some("toml") => TopologyFormat::Toml,
            _ => TopologyFormat::Text,
        }
    }
}

impl Topology {
    pub fn new(routers: usize, links: Vec<Edge>) -> Self {
        Topology {
            routers,
            links,
            no_transit: Vec::new(),
        }
    }

    /// Load and validate a topology file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::Other(format!(
                "failed to read topology from {}: {}",
                path.display(),
                e
            ))
        })?;
        let topology = Self::parse(&content, TopologyFormat::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            routers = topology.routers,
            links = topology.links.len(),
            "load_topology"
        );
        Ok(topology)
    }

    /// Parse and validate topology text in the given format
    pub fn parse(content: &str, format: TopologyFormat) -> Result<Self> {
        let topology: Topology = match format {
            TopologyFormat::Json => serde_json::from_str(content)?,
            TopologyFormat::Toml => toml::from_str(content)?,
            TopologyFormat::Text => content.parse()?,
        };
        topology.validate()?;
        Ok(topology)
    }

    /// Check every referenced router id against `routers`
    pub fn validate(&self) -> Result<()> {
        for link in &self.links {
            if link.source >= self.routers {
                crate::bail_out_of_range!("link source", link.source, self.routers);
            }
            if link.destination >= self.routers {
                crate::bail_out_of_range!("link destination", link.destination, self.routers);
            }
        }
        if let Some(&node) = self.no_transit.iter().find(|&&n| n >= self.routers) {
            crate::bail_out_of_range!("no-transit router", node, self.routers);
        }
        Ok(())
    }

    /// Build an engine request from this topology
    pub fn request(&self, source: NodeId, objective: Objective) -> RouteRequest {
        RouteRequest::new(self.routers, self.links.clone(), source, objective)
            .with_no_transit(self.no_transit.iter().copied())
    }
}

impl FromStr for Topology {
    type Err = RouteError;

    /// Parse the plain-text format (without range validation)
    fn from_str(s: &str) -> Result<Self> {
        let mut routers: Option<usize> = None;
        let mut links = Vec::new();

        for (index, raw) in s.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match routers {
                None => {
                    if fields.len() != 1 {
                        crate::bail_parse!(line_no, "expected the router count on its own line");
                    }
                    routers = Some(parse_field(fields[0], "router count", line_no)?);
                }
                Some(_) => {
                    if fields.len() != 3 {
                        crate::bail_parse!(
                            line_no,
                            format!(
                                "expected `src dst weight`, found {} field(s)",
                                fields.len()
                            )
                        );
                    }
                    let source: NodeId = parse_field(fields[0], "source router", line_no)?;
                    let destination: NodeId =
                        parse_field(fields[1], "destination router", line_no)?;
                    let weight: Weight = parse_field(fields[2], "weight", line_no)?;
                    links.push(Edge::new(source, destination, weight));
                }
            }
        }

        let routers = routers.ok_or_else(|| RouteError::parse(1, "missing router count"))?;
        Ok(Topology::new(routers, links))
    }
}

fn parse_field<T: FromStr>(value: &str, what: &str, line: usize) -> Result<T> {
    value
        .parse()
        .map_err(|_| RouteError::parse(line, format!("invalid {}: {}", what, value)))
}
