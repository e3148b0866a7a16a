//! Library exports for hotelier-cli.
//!
//! The binary is a thin wrapper around these modules; exposing them keeps
//! the command tree available to tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
