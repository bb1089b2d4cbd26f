//! Pipeline endpoints.
//!
//! The run handler is the heart of the service: resolve a pipeline name to
//! its stored definition, execute the stages, build the summarization
//! prompt, obtain a summary through the cache, and assemble the response.
//! Each stage has its own terminal error exit; nothing is retried here.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use gamelens_store::Document;

use crate::error::{ApiError, Result};
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Query params for running a pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RunPipelineQuery {
    /// Name of the stored pipeline to run.
    pub name: Option<String>,
}

/// Response for a successful pipeline run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RunPipelineResponse {
    /// The pipeline name, echoed back.
    pub title: String,
    /// The stored description, or the empty string when none exists.
    pub description: String,
    /// Records produced by the aggregation.
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Document>,
    /// AI-generated commentary on the records.
    pub ai_summary: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /pipelines - List all stored pipeline names.
#[utoipa::path(
    get,
    path = "/pipelines",
    responses(
        (status = 200, description = "All stored pipeline names", body = Vec<String>),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    ),
    tag = "pipelines"
)]
pub async fn list_pipelines_handler(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let names = state.pipelines.list_pipeline_names().await?;
    Ok(Json(names))
}

/// GET /dynamic-pipeline - Run a stored pipeline and summarize the result.
#[utoipa::path(
    get,
    path = "/dynamic-pipeline",
    params(
        ("name" = Option<String>, Query, description = "Name of the stored pipeline to run"),
    ),
    responses(
        (status = 200, description = "Aggregation result with AI summary", body = RunPipelineResponse),
        (status = 400, description = "Missing pipeline name", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown pipeline name", body = crate::error::ErrorBody),
        (status = 500, description = "Aggregation or summarization failure", body = crate::error::ErrorBody),
    ),
    tag = "pipelines"
)]
pub async fn run_pipeline_handler(
    State(state): State<AppState>,
    Query(query): Query<RunPipelineQuery>,
) -> Result<Json<RunPipelineResponse>> {
    let name = match query.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::MissingName),
    };

    let definition = state
        .pipelines
        .find_pipeline(name)
        .await?
        .ok_or_else(|| ApiError::UnknownPipeline(name.to_string()))?;

    let data = state.runner.run(&definition.pipeline).await?;
    info!(
        pipeline = name,
        records = data.len(),
        "Pipeline executed"
    );

    let description = definition.description.unwrap_or_default();
    let prompt = build_prompt(name, &description, &data)?;

    let summary = {
        let summarizer = Arc::clone(&state.summarizer);
        let call_prompt = prompt.clone();
        state
            .summaries
            .get_or_compute(&prompt, move || async move {
                summarizer.summarize(&call_prompt).await
            })
            .await?
    };

    Ok(Json(RunPipelineResponse {
        title: name.to_string(),
        description,
        data,
        ai_summary: summary,
    }))
}

/// Build the summarization prompt.
///
/// The rendering must be deterministic for identical input so the cache
/// behaves predictably; `Document` serialization preserves field order.
fn build_prompt(name: &str, description: &str, data: &[Document]) -> Result<String> {
    let rendered = serde_json::to_string(data)?;
    Ok(format!(
        "Summarize this data insight about “{name}”. {description}\n\n{rendered}"
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
