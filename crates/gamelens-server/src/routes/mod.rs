//! API routes.

pub mod health;
pub mod openapi;
pub mod pipelines;

pub use health::{HealthResponse, health, health_routes};
pub use openapi::{ApiDoc, openapi_handler};
pub use pipelines::{
    RunPipelineQuery, RunPipelineResponse, list_pipelines_handler, run_pipeline_handler,
};
