//! mvector-cli: command-line front end for the `mvector` crate.
//!
//! The argument definition, configuration loading and command runners live
//! here so they can be exercised from tests; `main.rs` only dispatches.
pub mod cli;
pub mod commands;
pub mod config;
