//! Roster CLI
//!
//! This crate provides the command-line interface for Roster including:
//! - search: Run a query directly against a dataset file
//! - serve: Start the search server
//! - find: Query a running server through the client

pub mod commands;

pub use commands::{Cli, Commands};
