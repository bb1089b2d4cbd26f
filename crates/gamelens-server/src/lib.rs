//! HTTP API server for GameLens.
//!
//! This crate provides the network transport layer: it resolves a named,
//! precomputed aggregation pipeline, executes it against the document
//! store, and returns the records together with an AI-generated summary.
//!
//! # Endpoints
//!
//! - `GET /pipelines` — all stored pipeline names
//! - `GET /dynamic-pipeline?name=<string>` — run a pipeline and summarize
//! - `GET /health` — liveness
//! - `GET /api-docs/openapi.json` — generated OpenAPI document
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use gamelens_llm::{GeminiBackend, GeminiConfig};
//! use gamelens_server::{AppState, Server, ServerConfig};
//! use gamelens_store::{MongoAggregationRunner, MongoPipelineStore};
//!
//! let state = AppState::new(
//!     ServerConfig::default(),
//!     Arc::new(MongoPipelineStore::new(&db, "pipelines")),
//!     Arc::new(MongoAggregationRunner::new(&db, "games")),
//!     Arc::new(GeminiBackend::new(GeminiConfig::new(api_key))?),
//! );
//! Server::from_state(state).run().await?;
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, Result};
pub use routes::{RunPipelineQuery, RunPipelineResponse};
pub use state::AppState;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The GameLens HTTP server.
pub struct Server {
    /// Application state.
    state: AppState,
}

impl Server {
    /// Create a server from a pre-built application state.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router with all routes and middleware.
    ///
    /// CORS is permissive: the API serves browser dashboards from any
    /// origin.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(routes::health_routes())
            .route("/pipelines", get(routes::list_pipelines_handler))
            .route("/dynamic-pipeline", get(routes::run_pipeline_handler))
            .route("/api-docs/openapi.json", get(routes::openapi_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.bind_address;
        self.run_on(addr).await
    }

    /// Run the server on a specific address (useful for testing).
    pub async fn run_on(self, addr: SocketAddr) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.state.config.bind_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use gamelens_llm::MockSummarizer;
    use gamelens_store::{MemoryPipelineStore, MockAggregationRunner};

    fn create_test_server() -> Server {
        let state = AppState::new(
            ServerConfig::default(),
            Arc::new(MemoryPipelineStore::new()),
            Arc::new(MockAggregationRunner::default()),
            Arc::new(MockSummarizer::with_text("Test summary")),
        );
        Server::from_state(state)
    }

    #[tokio::test]
    async fn test_server_health_endpoint() {
        let app = create_test_server().router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_headers_allow_any_origin() {
        let app = create_test_server().router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pipelines")
                    .header("Origin", "http://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = create_test_server().router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
