//! Shared helpers for the integration tests.

#![allow(dead_code)]

use grandid::GrandIdConfig;
use wiremock::{Mock, MockServer};

pub const API_KEY: &str = "integration-api-key";
pub const SERVICE_KEY: &str = "integration-service-key";

/// A mock GrandID server serving under `/json1.1`.
///
/// The runtime is only used to set the server up; the blocking clients
/// under test run on the test thread.
pub struct MockGrandId {
    pub server: MockServer,
    runtime: tokio::runtime::Runtime,
}

impl MockGrandId {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn config(&self) -> GrandIdConfig {
        GrandIdConfig::new(API_KEY, SERVICE_KEY)
            .with_base_url(format!("{}/json1.1", self.server.uri()))
    }

    /// Number of requests the server has seen so far.
    pub fn request_count(&self) -> usize {
        self.runtime
            .block_on(self.server.received_requests())
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
