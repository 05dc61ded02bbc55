//! Library components of the `blueprint` command-line tool.

pub mod commands;
pub mod config;
pub mod logging;
pub mod types;
