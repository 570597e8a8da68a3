//! Routewise Core Library
//!
//! Single-source best-path computation over directed router networks:
//! latency minimization or bandwidth maximization, with optional
//! no-transit policies.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod render;
pub mod topology;
