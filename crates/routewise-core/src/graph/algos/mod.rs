//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source best paths with lazy deletion

pub mod dijkstra;

pub use dijkstra::{dijkstra, HeapEntry};
