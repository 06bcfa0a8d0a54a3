//! HTTP server for Roster

use axum::{routing::get, Router};
use roster_core::{RecordStore, RosterError, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::executor::SearchExecutor;
use crate::handlers::{OpenApiHandler, SearchHandler};
use crate::state::AppState;

/// Runtime server for Roster
pub struct Runtime {
    settings: Arc<Settings>,
    executor: Arc<SearchExecutor>,
}

impl Runtime {
    /// Create a new runtime serving the given store
    pub fn new(settings: Settings, store: RecordStore) -> Self {
        let executor = Arc::new(SearchExecutor::new(Arc::new(store)));
        Self {
            settings: Arc::new(settings),
            executor,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let mut state = AppState::new(self.executor.clone());
        if let Some(token) = self.settings.access_token() {
            state = state.with_access_token(token);
        }

        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // Request timeout
        let timeout = TimeoutLayer::new(self.settings.request_timeout());

        Router::new()
            .route("/search", get(SearchHandler::search))
            .route("/docs", get(OpenApiHandler::handle))
            .route("/health", get(Self::health_check))
            .with_state(state)
            .layer(cors)
            .layer(timeout)
            .layer(TraceLayer::new_for_http())
    }

    /// Health check endpoint
    async fn health_check() -> &'static str {
        "OK"
    }

    /// Bind the configured port and serve until shutdown
    pub async fn run(&self) -> Result<(), RosterError> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.settings.port())
            .parse()
            .map_err(|e| RosterError::Server(format!("Invalid address: {}", e)))?;

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::Server(format!("Failed to bind: {}", e)))?;

        info!("Starting Roster server on http://{}", addr);
        info!("Records: {}", self.executor.store_len());
        info!("OpenAPI docs: http://{}/docs", addr);

        self.serve(listener).await
    }

    /// Serve on an already bound listener until CTRL+C or SIGTERM
    pub async fn serve(&self, listener: TcpListener) -> Result<(), RosterError> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| RosterError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn executor(&self) -> &SearchExecutor {
        &self.executor
    }
}
