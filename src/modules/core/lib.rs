//! Core domain logic for Roster
//!
//! This crate contains the record model, the read-only record store, the
//! search pipeline (filter, order, page) and the error types.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{RosterError, ValidationError};
