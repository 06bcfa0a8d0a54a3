//! HTTP request handlers for the Roster server
//!
//! This module contains handlers for search requests and the OpenAPI
//! documentation.

mod openapi;
mod search;

pub use openapi::OpenApiHandler;
pub use search::SearchHandler;
