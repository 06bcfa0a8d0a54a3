//! Search handler

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roster_types::wire::{error_codes, ACCESS_TOKEN_HEADER};
use roster_types::{ErrorResponse, SearchParams};
use tracing::{info, warn};

use crate::state::AppState;

/// Handler for search requests
pub struct SearchHandler;

impl SearchHandler {
    /// Handle GET /search
    pub async fn search(
        State(state): State<AppState>,
        headers: HeaderMap,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> Response {
        let token = headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if !state.authorize(token) {
            warn!("Rejected search request with bad access token");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(error_codes::UNAUTHORIZED)),
            )
                .into_response();
        }

        let params = SearchParams::from_pairs(pairs);
        info!("Search request: {:?}", params);

        match state.executor.handle(&params) {
            Ok(response) => {
                info!(
                    "Search returned {} users, next_page={}",
                    response.users.len(),
                    response.next_page
                );
                (StatusCode::OK, Json(response)).into_response()
            }
            Err(e) => {
                let status = StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::BAD_REQUEST);
                (status, Json(ErrorResponse::new(e.code()))).into_response()
            }
        }
    }
}
