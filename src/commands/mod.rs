//! CLI commands

pub mod date;
pub mod downloads;
pub mod list;
pub mod page;
