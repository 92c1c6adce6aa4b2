//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod market;
pub mod output;
pub mod paths;
pub mod resolve;
pub mod run;
