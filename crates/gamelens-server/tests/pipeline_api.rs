//! End-to-end tests for the pipeline API over a real listener.

mod common;

use std::sync::Arc;

use anyhow::Result;

use gamelens_llm::MockSummarizer;
use gamelens_store::{MemoryPipelineStore, MockAggregationRunner};

#[tokio::test]
async fn test_list_pipelines_returns_stored_names() -> Result<()> {
    let server = common::TestServer::start().await?;

    let names: Vec<String> = server.get("/pipelines").send().await?.json().await?;
    assert_eq!(names, vec!["top_genres"]);

    Ok(())
}

#[tokio::test]
async fn test_run_pipeline_end_to_end() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server.get("/dynamic-pipeline?name=top_genres").send().await?;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["title"], "top_genres");
    assert_eq!(body["description"], "Most played genres");
    assert_eq!(
        body["data"],
        serde_json::json!([
            { "_id": "A", "count": 2 },
            { "_id": "B", "count": 1 },
        ])
    );
    assert_eq!(body["ai_summary"], "Genre A dominates playtime.");

    Ok(())
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() -> Result<()> {
    let server = common::TestServer::start().await?;

    let first: serde_json::Value = server
        .get("/dynamic-pipeline?name=top_genres")
        .send()
        .await?
        .json()
        .await?;
    let second: serde_json::Value = server
        .get("/dynamic-pipeline?name=top_genres")
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(first["ai_summary"], second["ai_summary"]);
    assert_eq!(server.summarizer.call_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_missing_name_is_400_regardless_of_store_state() -> Result<()> {
    let server = common::TestServer::start_with(
        MemoryPipelineStore::new(),
        MockAggregationRunner::default(),
        Arc::new(MockSummarizer::with_text("unused")),
    )
    .await?;

    let resp = server.get("/dynamic-pipeline").send().await?;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body, serde_json::json!({ "error": "Missing pipeline name" }));

    Ok(())
}

#[tokio::test]
async fn test_unknown_pipeline_is_404() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server.get("/dynamic-pipeline?name=nope").send().await?;
    assert_eq!(resp.status().as_u16(), 404);

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["error"], "No pipeline named “nope”");

    Ok(())
}

#[tokio::test]
async fn test_aggregation_failure_is_500() -> Result<()> {
    let server = common::TestServer::start_with(
        MemoryPipelineStore::with_pipelines(vec![common::top_genres_definition()]),
        MockAggregationRunner::with_error("cursor timeout"),
        Arc::new(MockSummarizer::with_text("unused")),
    )
    .await?;

    let resp = server.get("/dynamic-pipeline?name=top_genres").send().await?;
    assert_eq!(resp.status().as_u16(), 500);

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["error"], "MongoDB error: cursor timeout");

    Ok(())
}
