// src/cli/mod.rs
//! CLI argument surface and command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;
