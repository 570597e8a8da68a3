//! Output formats for route results
//!
//! - human: `Router i - cost (objective)` lines for the terminal
//! - json: one pretty-printed document per command
//! - records: `H`/`R`/`P` prefixed lines for scripts and log pipelines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Human, OutputFormat::Json, OutputFormat::Records];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }

    /// Whether output is meant for a person rather than a parser
    pub fn is_human(self) -> bool {
        self == OutputFormat::Human
    }
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or(RouteError::UnknownFormat(wanted))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
