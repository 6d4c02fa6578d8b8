//! Common test utilities for integration tests.

use infermedica_client::{ClientBuilder, InfermedicaClient};
use wiremock::MockServer;

pub const APP_ID: &str = "test-app-id";
pub const APP_KEY: &str = "test-app-key";

/// A mock Infermedica API plus a client pointed at it.
pub struct TestApi {
    /// The mock server.
    pub server: MockServer,
    /// Client configured for this server.
    pub client: InfermedicaClient,
}

impl TestApi {
    /// Start a mock server and a client with default settings.
    pub async fn start() -> Self {
        Self::start_with(|builder| builder).await
    }

    /// Start a mock server and a client customized by `configure`.
    pub async fn start_with(configure: impl FnOnce(ClientBuilder) -> ClientBuilder) -> Self {
        let server = MockServer::start().await;
        let builder = InfermedicaClient::builder()
            .base_url(format!("{}/v3/", server.uri()))
            .app_id(APP_ID)
            .app_key(APP_KEY);
        let client = configure(builder)
            .build()
            .expect("client should build against the mock server");
        Self { server, client }
    }

    /// Requests the mock server has seen so far.
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled by default")
    }
}
