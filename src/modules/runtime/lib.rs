//! Search service for Roster
//!
//! This crate provides the HTTP server, parameter validation, paged search
//! execution, and request handlers over a loaded record store.

pub mod executor;
pub mod handlers;
pub mod server;
pub mod state;

pub use executor::{ParamValidator, SearchExecutor};
pub use handlers::{OpenApiHandler, SearchHandler};
pub use server::Runtime;
pub use state::AppState;
