//! Type definitions for Roster
//!
//! This crate contains the wire types shared by the search service and its
//! client, including the closed ordering enumerations.

pub mod order;
pub mod wire;

pub use order::{OrderBy, OrderField};
pub use wire::{ErrorResponse, SearchParams, SearchRequest, SearchResponse, User};
