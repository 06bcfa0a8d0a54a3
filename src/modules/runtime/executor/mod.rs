//! Search execution module
//!
//! Handles parameter validation, the lookahead page request, and projection
//! of records to their public shape.

mod validator;

pub use validator::ParamValidator;

use roster_core::{Query, RecordStore, ValidationError};
use roster_types::{SearchParams, SearchResponse};
use std::sync::Arc;
use tracing::debug;

/// Search executor that orchestrates validation, search, and pagination
pub struct SearchExecutor {
    store: Arc<RecordStore>,
    validator: ParamValidator,
}

impl SearchExecutor {
    /// Create a new search executor over a loaded store
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            validator: ParamValidator::new(),
        }
    }

    /// Validate raw parameters and run the search
    ///
    /// The store is only searched once validation succeeds.
    pub fn handle(&self, params: &SearchParams) -> Result<SearchResponse, ValidationError> {
        let query = self.validator.validate(params)?;
        Ok(self.execute(&query))
    }

    /// Run a validated query and build one page
    ///
    /// One record past the page is requested; if it comes back, it is
    /// dropped and `next_page` is set.
    pub fn execute(&self, query: &Query) -> SearchResponse {
        let lookahead = Query {
            limit: query.limit.saturating_add(1),
            ..query.clone()
        };

        let found = self.store.search(&lookahead);
        let next_page = found.len() == lookahead.limit;

        let users = found
            .iter()
            .take(query.limit)
            .map(|record| record.to_user())
            .collect::<Vec<_>>();

        debug!("page of {} users, next_page={}", users.len(), next_page);
        SearchResponse { users, next_page }
    }

    /// Number of records being served
    pub fn store_len(&self) -> usize {
        self.store.len()
    }
}
