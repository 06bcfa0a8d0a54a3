//! Client for the Roster search service
//!
//! Issues search requests over HTTP, classifies transport and service
//! failures into [`ClientError`], and returns the typed page.

pub mod client;
pub mod error;

pub use client::{SearchClient, DEFAULT_MAX_LIMIT, DEFAULT_TIMEOUT};
pub use error::ClientError;
