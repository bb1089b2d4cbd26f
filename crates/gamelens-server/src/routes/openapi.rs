//! OpenAPI documentation configuration.

use axum::Json;
use utoipa::OpenApi;

use super::{health, pipelines};
use crate::error::ErrorBody;

/// OpenAPI documentation for the GameLens API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GameLens API",
        description = "AI-annotated analytics over stored aggregation pipelines",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Local server"),
    ),
    paths(
        health::health,
        pipelines::list_pipelines_handler,
        pipelines::run_pipeline_handler,
    ),
    components(
        schemas(
            health::HealthResponse,
            pipelines::RunPipelineResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "pipelines", description = "Stored aggregation pipelines"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - Serve the generated OpenAPI document.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
