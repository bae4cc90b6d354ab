/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for btcchina-adapter tests

use std::time::Duration;

use btcchina_adapter::{BtcChinaClient, ClientConfig, Credentials};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credential pair for deterministic signatures
pub fn test_credentials() -> Credentials {
    Credentials::new("test-access", "test-secret")
}

/// Client with both hosts pointed at the mock server
pub fn client_for(server: &MockServer) -> BtcChinaClient {
    BtcChinaClient::with_config_and_base_urls(
        test_credentials(),
        ClientConfig::default(),
        &server.uri(),
        &server.uri(),
    )
    .expect("client init")
}

/// Same as [`client_for`] but with a short total timeout
#[allow(dead_code)]
pub fn impatient_client_for(server: &MockServer) -> BtcChinaClient {
    let config = ClientConfig {
        timeout: Duration::from_millis(100),
        connect_timeout: Duration::from_millis(100),
    };
    BtcChinaClient::with_config_and_base_urls(test_credentials(), config, &server.uri(), &server.uri())
        .expect("client init")
}
