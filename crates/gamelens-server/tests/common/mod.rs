//! Common test utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use gamelens_llm::MockSummarizer;
use gamelens_server::{AppState, Server, ServerConfig};
use gamelens_store::{
    Document, MemoryPipelineStore, MockAggregationRunner, PipelineDefinition, bson::doc,
};

/// A test server that runs in the background.
pub struct TestServer {
    /// The server's address.
    pub addr: SocketAddr,
    /// HTTP client configured for this server.
    pub client: Client,
    /// The shared mock summarizer, for counting provider invocations.
    pub summarizer: Arc<MockSummarizer>,
    /// Handle to the server task.
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server seeded with the `top_genres` pipeline and two
    /// aggregation runs of its records.
    pub async fn start() -> Result<Self> {
        let pipelines = MemoryPipelineStore::with_pipelines(vec![top_genres_definition()]);
        let runner =
            MockAggregationRunner::new(vec![Ok(genre_records()), Ok(genre_records())]);
        let summarizer = Arc::new(MockSummarizer::new(vec![
            Ok("Genre A dominates playtime.".to_string()),
            Ok("second summary (must not be used)".to_string()),
        ]));

        Self::start_with(pipelines, runner, Arc::clone(&summarizer)).await
    }

    /// Start a test server with explicit collaborators.
    pub async fn start_with(
        pipelines: MemoryPipelineStore,
        runner: MockAggregationRunner,
        summarizer: Arc<MockSummarizer>,
    ) -> Result<Self> {
        let addr = find_available_port().await?;

        let config = ServerConfig::default().with_bind_address(addr);
        let state = AppState::new(
            config,
            Arc::new(pipelines),
            Arc::new(runner),
            Arc::clone(&summarizer) as Arc<dyn gamelens_llm::Summarizer>,
        );

        let server = Server::from_state(state);
        let handle = tokio::spawn(async move {
            let _ = server.run_on(addr).await;
        });

        let client = Client::new();
        wait_for_server(&client, addr).await?;

        Ok(Self {
            addr,
            client,
            summarizer,
            _handle: handle,
        })
    }

    /// Get the base URL for the server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Issue a GET request against the server.
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{}", self.base_url(), path))
    }
}

/// The example pipeline from the dashboard's seed data.
pub fn top_genres_definition() -> PipelineDefinition {
    PipelineDefinition {
        name: "top_genres".to_string(),
        description: Some("Most played genres".to_string()),
        pipeline: vec![doc! { "$group": { "_id": "$genre", "count": { "$sum": 1 } } }],
    }
}

/// The records that pipeline yields over three games with genres A, A, B.
pub fn genre_records() -> Vec<Document> {
    vec![
        doc! { "_id": "A", "count": 2 },
        doc! { "_id": "B", "count": 1 },
    ]
}

/// Find an available port for the test server.
async fn find_available_port() -> Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

/// Wait for the server to become ready.
async fn wait_for_server(client: &Client, addr: SocketAddr) -> Result<()> {
    let url = format!("http://{}/health", addr);

    let result = timeout(Duration::from_secs(5), async {
        loop {
            match client.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => return Ok(()),
                _ => tokio::time::sleep(Duration::from_millis(50)).await,
            }
        }
    })
    .await;

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => anyhow::bail!("Timeout waiting for server to start"),
    }
}
