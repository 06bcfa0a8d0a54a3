//! Shared runtime application state (HTTP handlers)

use crate::executor::SearchExecutor;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<SearchExecutor>,
    access_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(executor: Arc<SearchExecutor>) -> Self {
        Self {
            executor,
            access_token: None,
        }
    }

    /// Require callers to present `token` in the access token header
    pub fn with_access_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Whether a presented token is accepted
    pub fn authorize(&self, presented: Option<&str>) -> bool {
        match &self.access_token {
            Some(expected) => presented == Some(expected.as_ref()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RecordStore;

    fn create_state() -> AppState {
        AppState::new(Arc::new(SearchExecutor::new(Arc::new(RecordStore::default()))))
    }

    #[test]
    fn test_open_without_token() {
        let state = create_state();
        assert!(state.authorize(None));
        assert!(state.authorize(Some("anything")));
    }

    #[test]
    fn test_token_required() {
        let state = create_state().with_access_token("secret");
        assert!(state.authorize(Some("secret")));
        assert!(!state.authorize(Some("wrong")));
        assert!(!state.authorize(None));
    }
}
