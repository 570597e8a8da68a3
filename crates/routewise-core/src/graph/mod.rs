//! Best-path computation over router networks
//!
//! Pipeline, leaves first:
//! - `policy`: no-transit filtering of the link list
//! - `builder`: link list to adjacency map
//! - `algos::dijkstra`: lazy-deletion single-source engine
//! - `path`: engine results and path reconstruction

pub mod algos;
pub mod builder;
pub mod compute;
pub mod objective;
pub mod path;
pub mod policy;
pub mod types;

pub use algos::dijkstra;
pub use builder::AdjacencyMap;
pub use compute::{compute, RouteRequest};
pub use objective::Objective;
pub use path::{reconstruct_path, Path, ShortestPaths};
pub use policy::apply_no_transit_policy;
pub use types::{Distance, Edge, NodeId, Weight};
