//! Server configuration.

use std::net::SocketAddr;

use gamelens_llm::DEFAULT_CACHE_CAPACITY;

/// Server configuration.
///
/// CORS is always permissive: the API serves browser dashboards from any
/// origin and carries no credentials.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,

    /// Maximum number of distinct prompts kept in the summary cache.
    pub summary_cache_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".parse().unwrap(),
            summary_cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address.
    pub fn with_bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = addr;
        self
    }

    /// Set the summary cache capacity.
    pub fn with_summary_cache_capacity(mut self, capacity: usize) -> Self {
        self.summary_cache_capacity = capacity;
        self
    }
}
