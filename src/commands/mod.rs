//! CLI commands for routewise

pub mod dispatch;
pub mod interactive;
pub mod path;
pub mod query;
pub mod render;
pub mod route;
