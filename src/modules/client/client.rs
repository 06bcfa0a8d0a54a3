//! HTTP client for the search service

use reqwest::{Response, StatusCode};
use roster_types::wire::ACCESS_TOKEN_HEADER;
use roster_types::{ErrorResponse, SearchRequest, SearchResponse};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Largest page size requested from the service.
pub const DEFAULT_MAX_LIMIT: i64 = 25;

/// Client for a single search service
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    timeout: Duration,
    max_limit: i64,
}

impl SearchClient {
    /// Create a new client for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        // Ensure base URL doesn't have trailing slash
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: reqwest::Client::new(),
            base_url,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }

    /// Send `token` in the access token header
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Clamp requested limits to `max_limit`
    pub fn with_max_limit(mut self, max_limit: i64) -> Self {
        self.max_limit = max_limit;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of records
    ///
    /// Obviously bad limits and offsets fail before anything is sent. The
    /// returned `next_page` flag is the one the service computed.
    pub async fn find(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        if request.limit <= 0 {
            return Err(ClientError::BadLimit);
        }
        if request.offset < 0 {
            return Err(ClientError::BadOffset);
        }

        let mut request = request.clone();
        if request.limit > self.max_limit {
            debug!("clamping limit {} to {}", request.limit, self.max_limit);
            request.limit = self.max_limit;
        }

        let url = format!("{}/search", self.base_url);
        let mut builder = self
            .client
            .get(&url)
            .query(&request.to_query_pairs())
            .timeout(self.timeout);
        if let Some(token) = &self.access_token {
            builder = builder.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("search request to {} failed: {}", url, e);
            ClientError::from(e)
        })?;

        Self::decode_response(response).await
    }

    async fn decode_response(response: Response) -> Result<SearchResponse, ClientError> {
        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.bytes().await?;
                serde_json::from_slice(&body).map_err(|e| ClientError::BadResponse(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::BAD_REQUEST => {
                let body = response.bytes().await?;
                let error: ErrorResponse = serde_json::from_slice(&body)
                    .map_err(|e| ClientError::BadResponse(e.to_string()))?;
                Err(ClientError::BadRequest(error.error))
            }
            _ => {
                warn!("unexpected search response status {}", status);
                Err(ClientError::UnknownError(status.as_u16()))
            }
        }
    }
}
